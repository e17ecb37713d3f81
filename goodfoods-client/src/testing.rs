//! In-memory gateway for unit tests

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use shared::models::{
    AgentMessage, AgentResponse, AgentResponseType, CancelResponse, ContactInfo,
    CreateReservationRequest, RecommendRequest, Reservation, ReservationStatus,
};
use std::collections::HashMap;

use crate::gateway::Gateway;
use crate::session::SessionId;
use crate::{ClientError, ClientResult};

pub(crate) fn reservation(
    id: &str,
    venue_name: &str,
    datetime: &str,
    status: ReservationStatus,
    party_size: u32,
) -> Reservation {
    Reservation {
        id: id.to_string(),
        venue_id: format!("venue-{}", venue_name.to_lowercase().replace(' ', "-")),
        venue_name: venue_name.to_string(),
        datetime: datetime.to_string(),
        party_size,
        status,
        contact: ContactInfo {
            name: "A".to_string(),
            phone: "1".to_string(),
            email: "a@b.com".to_string(),
        },
        notes: None,
        booking_id: format!("BK-{}", id.to_uppercase()),
    }
}

fn failure(message: &str) -> ClientError {
    ClientError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: message.to_string(),
    }
}

/// Records every call; either echoes plausible records or fails them all
#[derive(Default)]
pub(crate) struct StubGateway {
    fail: bool,
    reservations: Mutex<Vec<Reservation>>,
    reply: Option<AgentResponse>,
    calls: Mutex<HashMap<&'static str, usize>>,
    last_create: Mutex<Option<(SessionId, CreateReservationRequest)>>,
    last_message: Mutex<Option<AgentMessage>>,
}

impl StubGateway {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_reservations(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: Mutex::new(reservations),
            ..Default::default()
        }
    }

    pub fn with_reply(reply: AgentResponse) -> Self {
        Self {
            reply: Some(reply),
            ..Default::default()
        }
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.lock().get(op).copied().unwrap_or(0)
    }

    pub fn last_create(&self) -> Option<(SessionId, CreateReservationRequest)> {
        self.last_create.lock().clone()
    }

    pub fn last_message(&self) -> Option<AgentMessage> {
        self.last_message.lock().clone()
    }

    fn record(&self, op: &'static str) {
        *self.calls.lock().entry(op).or_insert(0) += 1;
    }

    fn agent_reply(&self, message: &str) -> ClientResult<AgentResponse> {
        if self.fail {
            return Err(failure(message));
        }
        Ok(self.reply.clone().unwrap_or_else(|| AgentResponse {
            kind: AgentResponseType::LlmResponse,
            text: "ok".to_string(),
            suggested_replies: None,
            structured: None,
        }))
    }
}

#[async_trait]
impl Gateway for StubGateway {
    async fn post_message(&self, request: &AgentMessage) -> ClientResult<AgentResponse> {
        self.record("post_message");
        *self.last_message.lock() = Some(request.clone());
        self.agent_reply("Failed to process message")
    }

    async fn recommend(&self, _request: &RecommendRequest) -> ClientResult<AgentResponse> {
        self.record("recommend");
        self.agent_reply("Failed to generate recommendations")
    }

    async fn create_reservation(
        &self,
        session: &SessionId,
        request: &CreateReservationRequest,
    ) -> ClientResult<Reservation> {
        self.record("create_reservation");
        *self.last_create.lock() = Some((session.clone(), request.clone()));
        if self.fail {
            return Err(failure("Failed to create reservation"));
        }
        Ok(Reservation {
            id: "r-1".to_string(),
            venue_id: request.venue_id.clone(),
            venue_name: "Saffron House".to_string(),
            datetime: request.datetime.clone(),
            party_size: request.party_size,
            status: ReservationStatus::Confirmed,
            contact: request.contact.clone(),
            notes: request.notes.clone(),
            booking_id: "BK-0001".to_string(),
        })
    }

    async fn list_reservations(&self, _session: &SessionId) -> ClientResult<Vec<Reservation>> {
        self.record("list_reservations");
        if self.fail {
            return Err(failure("Failed to fetch reservations"));
        }
        Ok(self.reservations.lock().clone())
    }

    async fn list_all_reservations(&self, _limit: Option<u32>) -> ClientResult<Vec<Reservation>> {
        self.record("list_all_reservations");
        if self.fail {
            return Err(failure("Failed to fetch admin reservations"));
        }
        Ok(self.reservations.lock().clone())
    }

    async fn cancel_reservation(&self, reservation_id: &str) -> ClientResult<CancelResponse> {
        self.record("cancel_reservation");
        if self.fail {
            return Err(failure("Failed to cancel reservation"));
        }
        let mut reservations = self.reservations.lock();
        if let Some(r) = reservations.iter_mut().find(|r| r.id == reservation_id) {
            let _ = r.cancel();
        }
        Ok(CancelResponse {
            success: true,
            cancelled_id: Some(reservation_id.to_string()),
        })
    }
}
