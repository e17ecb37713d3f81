use std::sync::Arc;
use std::time::Instant;

use goodfoods_client::{ClientConfig, Gateway};

use crate::core::Config;

/// Server state shared by every handler
///
/// Cheap to clone: all fields are behind `Arc`.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Arc<Config> | Immutable configuration |
/// | gateway | Arc<dyn Gateway> | Backend client |
/// | started_at | Instant | For uptime reporting |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn Gateway>,
    pub started_at: Instant,
}

impl ServerState {
    /// Build the HTTP gateway to `config.backend_url`
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let client_config = ClientConfig::new(config.backend_url.clone())
            .with_user_agent(format!("goodfoods-web-server/{}", env!("CARGO_PKG_VERSION")));
        let gateway = client_config.build_gateway()?;
        tracing::info!(backend_url = %config.backend_url, "Backend gateway ready");
        Ok(Self::with_gateway(config.clone(), Arc::new(gateway)))
    }

    /// Use an existing gateway (tests, embedding)
    pub fn with_gateway(config: Config, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
            started_at: Instant::now(),
        }
    }

    pub fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
