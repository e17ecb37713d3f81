// goodfoods-client/tests/gateway_integration.rs
// Gateway against an in-process mock backend

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use goodfoods_client::dashboard::{DashboardRefresher, RefreshOutcome};
use goodfoods_client::wizard::VenueRef;
use goodfoods_client::{
    ChatPanel, ClientConfig, ClientError, FileSessionStore, Gateway, HttpGateway,
    ReservationList, ReservationWizard, SessionId, SessionProvider, WizardStep,
};
use serde::Deserialize;
use serde_json::{Value, json};
use shared::models::{ContactInfo, CreateReservationRequest, Reservation, ReservationStatus};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Default)]
struct Backend {
    rows: Mutex<Vec<(String, Reservation)>>,
}

type Shared = Arc<Backend>;

#[derive(Deserialize)]
struct SessionParams {
    session_id: Option<String>,
}

fn scope(params: SessionParams) -> String {
    params
        .session_id
        .unwrap_or_else(|| "default_session".to_string())
}

async fn create(
    State(backend): State<Shared>,
    Query(params): Query<SessionParams>,
    Json(req): Json<CreateReservationRequest>,
) -> Json<Reservation> {
    let mut rows = backend.rows.lock().unwrap();
    let n = rows.len() + 1;
    let reservation = Reservation {
        id: format!("res-{n}"),
        venue_id: req.venue_id,
        venue_name: "Saffron House".to_string(),
        datetime: req.datetime,
        party_size: req.party_size,
        status: ReservationStatus::Confirmed,
        contact: req.contact,
        notes: req.notes,
        booking_id: format!("BK{n:06}"),
    };
    rows.push((scope(params), reservation.clone()));
    Json(reservation)
}

async fn list(State(backend): State<Shared>, Query(params): Query<SessionParams>) -> Json<Vec<Reservation>> {
    let session = scope(params);
    let rows = backend.rows.lock().unwrap();
    Json(
        rows.iter()
            .filter(|(s, _)| *s == session)
            .map(|(_, r)| r.clone())
            .collect(),
    )
}

async fn admin(State(backend): State<Shared>) -> Json<Vec<Reservation>> {
    let rows = backend.rows.lock().unwrap();
    Json(rows.iter().map(|(_, r)| r.clone()).collect())
}

async fn cancel(State(backend): State<Shared>, Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    let mut rows = backend.rows.lock().unwrap();
    match rows.iter_mut().find(|(_, r)| r.id == id) {
        Some((_, r)) => {
            r.status = ReservationStatus::Cancelled;
            (StatusCode::OK, Json(json!({"success": true, "cancelled_id": id})))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Reservation not found"})),
        ),
    }
}

async fn message(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["message"] == "boom" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to process message"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "type": "tool_result",
            "text": "I found some great options for you: Saffron House.",
            "suggested_replies": ["Tell me more", "Book one", "Different options"],
            "structured": {
                "intent": "recommendation",
                "venues": [{"id": "v001", "name": "Saffron House", "score": 0.87}]
            }
        })),
    )
}

async fn spawn_backend() -> (String, Shared) {
    let backend = Shared::default();
    let app = Router::new()
        .route("/api/reservations/create", post(create))
        .route("/api/reservations", get(list))
        .route("/api/reservations/admin", get(admin))
        .route("/api/reservations/{id}/cancel", post(cancel))
        .route("/api/agent/message", post(message))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), backend)
}

fn sample_request() -> CreateReservationRequest {
    CreateReservationRequest {
        venue_id: "v001".to_string(),
        datetime: "2025-12-01T19:00:00".to_string(),
        party_size: 2,
        contact: ContactInfo {
            name: "A".to_string(),
            phone: "1".to_string(),
            email: "a@b.com".to_string(),
        },
        notes: None,
    }
}

#[tokio::test]
async fn test_create_echoes_fields_with_server_ids() {
    let (url, backend) = spawn_backend().await;
    let gateway = ClientConfig::new(url).build_gateway().unwrap();
    let session = SessionId::new("session_1_abcdefghi");

    let reservation = gateway
        .create_reservation(&session, &sample_request())
        .await
        .unwrap();
    assert_eq!(reservation.venue_id, "v001");
    assert_eq!(reservation.datetime, "2025-12-01T19:00:00");
    assert_eq!(reservation.party_size, 2);
    assert_eq!(reservation.contact.email, "a@b.com");
    assert!(!reservation.id.is_empty());
    assert!(!reservation.booking_id.is_empty());

    let rows = backend.rows.lock().unwrap();
    assert_eq!(rows[0].0, "session_1_abcdefghi");
}

#[tokio::test]
async fn test_list_is_scoped_by_session() {
    let (url, _backend) = spawn_backend().await;
    let gateway = HttpGateway::from_config(&ClientConfig::new(url)).unwrap();
    let mine = SessionId::new("mine");
    let theirs = SessionId::new("theirs");

    gateway.create_reservation(&mine, &sample_request()).await.unwrap();
    gateway.create_reservation(&theirs, &sample_request()).await.unwrap();

    assert_eq!(gateway.list_reservations(&mine).await.unwrap().len(), 1);
    assert_eq!(gateway.list_all_reservations(Some(100)).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (url, _backend) = spawn_backend().await;
    let gateway = ClientConfig::new(url).build_gateway().unwrap();

    let err = gateway.cancel_reservation("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    assert_eq!(err.user_message(), "Request failed: Not Found");
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let gateway = ClientConfig::new(url).build_gateway().unwrap();
    let err = gateway.list_all_reservations(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(err.user_message(), "Unable to reach the reservation service");
}

#[tokio::test]
async fn test_wizard_then_cancel_round_trip() {
    let (url, _backend) = spawn_backend().await;
    let gateway = ClientConfig::new(url).with_timeout(5).build_gateway().unwrap();
    let session = SessionId::new("s1");
    let today = chrono::NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();

    let mut wizard = ReservationWizard::new(VenueRef::new("v001", "Saffron House"), today);
    wizard.next().unwrap();
    {
        let draft = wizard.draft_mut().unwrap();
        draft.name = "A".to_string();
        draft.phone = "1".to_string();
        draft.email = "a@b.com".to_string();
    }
    wizard.next().unwrap();
    let confirmation = wizard.submit(&gateway, &session).await.unwrap().clone();
    assert_eq!(wizard.step(), WizardStep::Success);
    assert_eq!(confirmation.reservation.datetime, "2099-01-01T19:00:00");

    let now = chrono::Utc::now();
    let mut list = ReservationList::new();
    list.load(&gateway, &session).await.unwrap();
    assert_eq!(list.upcoming(now).len(), 1);

    list.cancel(&gateway, &confirmation.reservation.id, now).await.unwrap();
    assert!(list.upcoming(now).is_empty());

    let all = gateway.list_all_reservations(None).await.unwrap();
    assert_eq!(all[0].status, ReservationStatus::Cancelled);
}

#[tokio::test]
async fn test_chat_and_dashboard_over_http() {
    let (url, _backend) = spawn_backend().await;
    let gateway = Arc::new(ClientConfig::new(url).build_gateway().unwrap());
    gateway
        .create_reservation(&SessionId::new("s1"), &sample_request())
        .await
        .unwrap();

    let mut panel = ChatPanel::new(SessionId::new("s1"));
    panel.send(gateway.as_ref(), "Show me Indian restaurants").await;
    assert_eq!(panel.suggestions()[0].id, "v001");
    panel.send(gateway.as_ref(), "boom").await;
    assert_eq!(
        panel.messages().last().unwrap().text,
        goodfoods_client::chat::FAILURE_REPLY
    );

    let refresher = DashboardRefresher::new(gateway, Some(100));
    assert_eq!(refresher.refresh().await, RefreshOutcome::Applied { generation: 1 });
    let snapshot = refresher.snapshot();
    assert_eq!(snapshot.stats.total_reservations, 1);
    assert_eq!(snapshot.stats.occupancy_rate, 100);
}

#[test]
fn test_file_session_is_stable_across_providers() {
    let temp_dir = TempDir::new().unwrap();

    let first = SessionProvider::new(FileSessionStore::new(temp_dir.path()))
        .session_id()
        .unwrap();
    let second = SessionProvider::new(FileSessionStore::new(temp_dir.path()))
        .session_id()
        .unwrap();
    assert_eq!(first, second);
    assert!(first.as_str().starts_with("session_"));
}

#[test]
fn test_corrupt_session_file_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp_dir.path());
    std::fs::write(store.path(), "not json").unwrap();

    let provider = SessionProvider::new(store);
    let id = provider.session_id().unwrap();
    assert_eq!(provider.session_id().unwrap(), id);
    assert!(provider.store().exists());
}
