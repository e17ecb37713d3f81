//! Agent API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/agent", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/message", post(handler::message))
        .route("/recommend", post(handler::recommend))
}
