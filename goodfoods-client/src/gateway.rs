//! Backend gateway
//!
//! One typed function per remote operation. Each call performs exactly one
//! HTTP request, turns a non-success status into [`ClientError::Status`] and
//! otherwise returns the parsed record. Nothing is retried.

use async_trait::async_trait;
use serde::Serialize;
use shared::models::{
    AgentMessage, AgentResponse, CancelResponse, CreateReservationRequest, RecommendRequest,
    Reservation,
};

use crate::http::{HttpClient, NetworkHttpClient, encode_path};
use crate::session::SessionId;
use crate::{ClientConfig, ClientResult};

/// Remote operations used by the views
#[async_trait]
pub trait Gateway: Send + Sync {
    /// POST /api/agent/message
    async fn post_message(&self, request: &AgentMessage) -> ClientResult<AgentResponse>;

    /// POST /api/agent/recommend
    async fn recommend(&self, request: &RecommendRequest) -> ClientResult<AgentResponse>;

    /// POST /api/reservations/create?session_id=
    async fn create_reservation(
        &self,
        session: &SessionId,
        request: &CreateReservationRequest,
    ) -> ClientResult<Reservation>;

    /// GET /api/reservations?session_id=
    async fn list_reservations(&self, session: &SessionId) -> ClientResult<Vec<Reservation>>;

    /// GET /api/reservations/admin (all sessions)
    async fn list_all_reservations(&self, limit: Option<u32>) -> ClientResult<Vec<Reservation>>;

    /// POST /api/reservations/{id}/cancel
    async fn cancel_reservation(&self, reservation_id: &str) -> ClientResult<CancelResponse>;
}

#[derive(Serialize)]
struct SessionQuery<'a> {
    session_id: &'a str,
}

#[derive(Serialize)]
struct LimitQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

/// [`Gateway`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpGateway<C = NetworkHttpClient> {
    http: C,
}

impl HttpGateway<NetworkHttpClient> {
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

impl<C: HttpClient> HttpGateway<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }
}

#[async_trait]
impl<C: HttpClient> Gateway for HttpGateway<C> {
    async fn post_message(&self, request: &AgentMessage) -> ClientResult<AgentResponse> {
        tracing::debug!(session_id = %request.session_id, "Posting agent message");
        self.http.post("/api/agent/message", request).await
    }

    async fn recommend(&self, request: &RecommendRequest) -> ClientResult<AgentResponse> {
        self.http.post("/api/agent/recommend", request).await
    }

    async fn create_reservation(
        &self,
        session: &SessionId,
        request: &CreateReservationRequest,
    ) -> ClientResult<Reservation> {
        let query = SessionQuery {
            session_id: session.as_str(),
        };
        let reservation: Reservation = self
            .http
            .post_with_query("/api/reservations/create", &query, request)
            .await?;
        tracing::info!(
            reservation_id = %reservation.id,
            booking_id = %reservation.booking_id,
            venue_id = %reservation.venue_id,
            "Reservation created"
        );
        Ok(reservation)
    }

    async fn list_reservations(&self, session: &SessionId) -> ClientResult<Vec<Reservation>> {
        let query = SessionQuery {
            session_id: session.as_str(),
        };
        self.http.get_with_query("/api/reservations", &query).await
    }

    async fn list_all_reservations(&self, limit: Option<u32>) -> ClientResult<Vec<Reservation>> {
        self.http
            .get_with_query("/api/reservations/admin", &LimitQuery { limit })
            .await
    }

    async fn cancel_reservation(&self, reservation_id: &str) -> ClientResult<CancelResponse> {
        let path = encode_path(&["api", "reservations", reservation_id, "cancel"])?;
        let response: CancelResponse = self.http.post_empty(&path).await?;
        tracing::info!(reservation_id = %reservation_id, success = response.success, "Reservation cancel requested");
        Ok(response)
    }
}
