//! Dashboard refresher
//!
//! Fetches the admin reservation list on demand and on a fixed period.
//! Every fetch is stamped with a generation number when issued; a result is
//! applied only if its generation is newer than the last applied one, so a
//! slow response can never overwrite fresher data. A failed fetch keeps the
//! previous snapshot and records the message.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::stats::DashboardSnapshot;
use crate::gateway::Gateway;

/// Period of the automatic refresh
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub snapshot: DashboardSnapshot,
    /// Generation of the applied snapshot, 0 before the first success
    pub applied_generation: u64,
    pub last_error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied { generation: u64 },
    /// A newer result was already applied
    Stale { generation: u64 },
    Failed { generation: u64, message: String },
}

/// Shared handle; clones observe the same state
#[derive(Clone)]
pub struct DashboardRefresher {
    gateway: Arc<dyn Gateway>,
    state: Arc<RwLock<DashboardState>>,
    issued: Arc<AtomicU64>,
    limit: Option<u32>,
}

impl DashboardRefresher {
    pub fn new(gateway: Arc<dyn Gateway>, limit: Option<u32>) -> Self {
        Self {
            gateway,
            state: Arc::new(RwLock::new(DashboardState::default())),
            issued: Arc::new(AtomicU64::new(0)),
            limit,
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state.read().clone()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state.read().snapshot.clone()
    }

    /// Fetch once and apply the result if it is still the freshest
    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.gateway.list_all_reservations(self.limit).await;

        let mut state = self.state.write();
        if generation <= state.applied_generation {
            tracing::debug!(generation, applied = state.applied_generation, "Discarding stale dashboard response");
            return RefreshOutcome::Stale { generation };
        }

        match result {
            Ok(reservations) => {
                state.snapshot = DashboardSnapshot::from_reservations(&reservations);
                state.applied_generation = generation;
                state.last_error = None;
                state.updated_at = Some(Utc::now());
                tracing::debug!(generation, count = reservations.len(), "Dashboard refreshed");
                RefreshOutcome::Applied { generation }
            }
            Err(e) => {
                tracing::warn!(generation, error = %e, "Dashboard refresh failed");
                let message = e.user_message();
                state.last_error = Some(message.clone());
                RefreshOutcome::Failed { generation, message }
            }
        }
    }

    /// Refresh immediately, then every `period` until stopped
    pub fn spawn(&self, period: Duration) -> RefreshTask {
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();
        let refresher = self.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::debug!("Dashboard refresher stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        tokio::select! {
                            _ = token.cancelled() => break,
                            _ = refresher.refresh() => {}
                        }
                    }
                }
            }
        });

        tracing::debug!(period_secs = period.as_secs_f64(), "Dashboard refresher started");
        RefreshTask {
            shutdown,
            handle: Some(handle),
        }
    }
}

/// Running periodic refresh
pub struct RefreshTask {
    shutdown: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTask {
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Cancel and wait for the loop to exit
    pub async fn stop(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "Dashboard refresher panicked");
            }
        }
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
