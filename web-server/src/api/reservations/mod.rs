//! Reservation API module
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/reservations | GET | Reservations of `session_id` |
//! | /api/reservations/create | POST | Create (validated before forwarding) |
//! | /api/reservations/admin | GET | All sessions, optional `limit` |
//! | /api/reservations/{id}/cancel | POST | Cancel; backend status passed through |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/create", post(handler::create))
        .route("/admin", get(handler::list_all))
        .route("/{id}/cancel", post(handler::cancel))
}
