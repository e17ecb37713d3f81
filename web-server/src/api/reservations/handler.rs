//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use goodfoods_client::SessionId;
use serde::Deserialize;
use shared::models::{CancelResponse, ContactInfo, CreateReservationRequest, Reservation};

use crate::core::{Result, ServerError, ServerState};
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
};

pub const MSG_MISSING_FIELDS: &str = "Missing required fields";

#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub session_id: Option<String>,
}

impl SessionQuery {
    /// Blank or absent means the shared default scope
    fn resolve(self, fallback: Option<String>) -> SessionId {
        self.session_id
            .or(fallback)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(SessionId::new)
            .unwrap_or_else(SessionId::fallback)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u32>,
}

/// Create body as received; every field may be missing
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePayload {
    pub venue_id: Option<String>,
    pub datetime: Option<String>,
    pub party_size: Option<u32>,
    pub contact: Option<ContactPayload>,
    pub notes: Option<String>,
    /// Accepted when the query string carries none
    pub session_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CreatePayload {
    /// `venue_id`, `datetime`, non-zero `party_size` and `contact.email` are required
    fn into_request(self) -> Result<(CreateReservationRequest, Option<String>)> {
        let contact = self.contact.unwrap_or_default();
        let (Some(venue_id), Some(datetime), Some(party_size), Some(email)) = (
            present(self.venue_id),
            present(self.datetime),
            self.party_size.filter(|n| *n > 0),
            present(contact.email),
        ) else {
            return Err(ServerError::validation(MSG_MISSING_FIELDS));
        };

        validate_email(&email)?;
        let name = contact.name.unwrap_or_default();
        let phone = contact.phone.unwrap_or_default();
        validate_optional_text(Some(name.as_str()), "name", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(Some(phone.as_str()), "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(self.notes.as_deref(), "notes", MAX_NOTE_LEN)?;

        let request = CreateReservationRequest {
            venue_id,
            datetime,
            party_size,
            contact: ContactInfo {
                name,
                phone,
                email: email.trim().to_string(),
            },
            notes: present(self.notes),
        };
        Ok((request, self.session_id))
    }
}

/// GET /api/reservations - reservations of one session
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<Vec<Reservation>>> {
    let session = query.resolve(None);
    let reservations = state
        .gateway()
        .list_reservations(&session)
        .await
        .map_err(ServerError::backend("Failed to fetch reservations"))?;
    tracing::debug!(session_id = %session, count = reservations.len(), "Listed reservations");
    Ok(Json(reservations))
}

/// POST /api/reservations/create - validate, then forward
pub async fn create(
    State(state): State<ServerState>,
    Query(query): Query<SessionQuery>,
    payload: std::result::Result<Json<CreatePayload>, JsonRejection>,
) -> Result<Json<Reservation>> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!(error = %e.body_text(), "Unreadable create body");
        ServerError::validation(MSG_MISSING_FIELDS)
    })?;
    let (request, body_session) = payload.into_request()?;
    let session = query.resolve(body_session);

    let reservation = state
        .gateway()
        .create_reservation(&session, &request)
        .await
        .map_err(ServerError::backend("Failed to create reservation"))?;

    tracing::info!(
        session_id = %session,
        reservation_id = %reservation.id,
        booking_id = %reservation.booking_id,
        "Reservation created"
    );
    Ok(Json(reservation))
}

/// GET /api/reservations/admin - every session
pub async fn list_all(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Reservation>>> {
    let reservations = state
        .gateway()
        .list_all_reservations(query.limit)
        .await
        .map_err(ServerError::backend("Failed to fetch admin reservations"))?;
    Ok(Json(reservations))
}

/// POST /api/reservations/{id}/cancel
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<CancelResponse>> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ServerError::validation("Reservation ID required"));
    }

    let response = state
        .gateway()
        .cancel_reservation(id)
        .await
        .map_err(ServerError::passthrough("Failed to cancel reservation"))?;
    tracing::info!(reservation_id = %id, success = response.success, "Reservation cancel forwarded");
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> CreatePayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_complete_payload() {
        let (request, session) = payload(
            r#"{"venue_id":"v001","datetime":"2025-12-01T19:00:00","party_size":2,
                "contact":{"name":"A","phone":"1","email":"a@b.com"},"notes":"  "}"#,
        )
        .into_request()
        .unwrap();
        assert_eq!(request.venue_id, "v001");
        assert_eq!(request.party_size, 2);
        assert!(request.notes.is_none());
        assert!(session.is_none());
    }

    #[test]
    fn test_missing_fields() {
        for json in [
            r#"{}"#,
            r#"{"venue_id":"v001","datetime":"2025-12-01T19:00:00","party_size":2}"#,
            r#"{"venue_id":"","datetime":"2025-12-01T19:00:00","party_size":2,"contact":{"email":"a@b.com"}}"#,
            r#"{"venue_id":"v001","datetime":"2025-12-01T19:00:00","party_size":0,"contact":{"email":"a@b.com"}}"#,
            r#"{"venue_id":"v001","party_size":2,"contact":{"email":"a@b.com"}}"#,
        ] {
            let err = payload(json).into_request().unwrap_err();
            assert!(matches!(err, ServerError::Validation(ref m) if m == MSG_MISSING_FIELDS), "{json}");
        }
    }

    #[test]
    fn test_malformed_email() {
        let err = payload(
            r#"{"venue_id":"v001","datetime":"2025-12-01T19:00:00","party_size":2,"contact":{"email":"nope"}}"#,
        )
        .into_request()
        .unwrap_err();
        assert!(matches!(err, ServerError::Validation(ref m) if m == "Invalid email address"));
    }

    #[test]
    fn test_session_resolution() {
        let q = |s: Option<&str>| SessionQuery {
            session_id: s.map(String::from),
        };
        assert_eq!(q(Some("s1")).resolve(None).as_str(), "s1");
        assert_eq!(q(None).resolve(Some("body".into())).as_str(), "body");
        assert_eq!(q(Some(" ")).resolve(None).as_str(), "default_session");
        assert_eq!(q(None).resolve(None).as_str(), "default_session");
    }
}
