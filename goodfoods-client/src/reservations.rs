//! "My reservations" list

use chrono::{DateTime, Utc};
use shared::models::Reservation;

use crate::gateway::Gateway;
use crate::session::SessionId;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Default)]
pub struct ReservationList {
    items: Vec<Reservation>,
    error: Option<String>,
}

impl ReservationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with the session's reservations.
    ///
    /// On failure the previous items stay and the error is recorded.
    pub async fn load<G>(&mut self, gateway: &G, session: &SessionId) -> ClientResult<usize>
    where
        G: Gateway + ?Sized,
    {
        match gateway.list_reservations(session).await {
            Ok(items) => {
                self.items = items;
                self.error = None;
                Ok(self.items.len())
            }
            Err(e) => {
                tracing::warn!(session_id = %session, error = %e, "Failed to load reservations");
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub fn items(&self) -> &[Reservation] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Reservations starting after `now`
    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<&Reservation> {
        self.items.iter().filter(|r| r.is_upcoming(now)).collect()
    }

    pub fn past(&self, now: DateTime<Utc>) -> Vec<&Reservation> {
        self.items.iter().filter(|r| !r.is_upcoming(now)).collect()
    }

    /// Cancel an upcoming reservation with a single call. On success it
    /// leaves the displayed list.
    pub async fn cancel<G>(
        &mut self,
        gateway: &G,
        reservation_id: &str,
        now: DateTime<Utc>,
    ) -> ClientResult<()>
    where
        G: Gateway + ?Sized,
    {
        let Some(index) = self
            .items
            .iter()
            .position(|r| r.id == reservation_id && r.is_upcoming(now))
        else {
            return Err(ClientError::Validation(
                "Only upcoming reservations can be cancelled".to_string(),
            ));
        };

        // Run the status transition on a copy; the list changes only once the backend agrees
        let mut cancelled = self.items[index].clone();
        cancelled
            .cancel()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        let outcome = match gateway.cancel_reservation(reservation_id).await {
            Ok(response) if response.success => Ok(()),
            Ok(_) => Err(ClientError::InvalidResponse(
                "Cancellation was not confirmed".to_string(),
            )),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                self.items.remove(index);
                self.error = None;
                tracing::info!(reservation_id = %reservation_id, "Reservation removed after cancel");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(reservation_id = %reservation_id, error = %e, "Cancel failed");
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}
