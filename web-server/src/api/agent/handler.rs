//! Agent API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::models::{AgentMessage, AgentResponse, RecommendRequest};

use crate::core::{Result, ServerError, ServerState};
use crate::utils::validation::{MAX_MESSAGE_LEN, validate_required_text};

/// POST /api/agent/message - forward a chat message
pub async fn message(
    State(state): State<ServerState>,
    payload: std::result::Result<Json<AgentMessage>, JsonRejection>,
) -> Result<Json<AgentResponse>> {
    let Json(request) = payload.map_err(|e| ServerError::validation(e.body_text()))?;
    validate_required_text(&request.message, "message", MAX_MESSAGE_LEN)?;

    tracing::debug!(session_id = %request.session_id, "Forwarding agent message");
    let response = state
        .gateway()
        .post_message(&request)
        .await
        .map_err(ServerError::backend("Failed to process message"))?;
    Ok(Json(response))
}

/// POST /api/agent/recommend - forward a recommendation query
pub async fn recommend(
    State(state): State<ServerState>,
    payload: std::result::Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<AgentResponse>> {
    let Json(request) = payload.map_err(|e| ServerError::validation(e.body_text()))?;

    let response = state
        .gateway()
        .recommend(&request)
        .await
        .map_err(ServerError::backend("Failed to generate recommendations"))?;
    Ok(Json(response))
}
