use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use goodfoods_client::ClientError;
use shared::ErrorBody;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Rejected before forwarding
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend answered non-success; its status is passed through
    #[error("{message} (backend status {status})")]
    Upstream {
        status: StatusCode,
        message: &'static str,
        #[source]
        source: ClientError,
    },

    /// Backend unreachable, failed or answered garbage
    #[error("{message}")]
    Backend {
        message: &'static str,
        #[source]
        source: ClientError,
    },

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ServerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Map a gateway failure to a 500 carrying `message`
    pub fn backend(message: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| Self::Backend { message, source }
    }

    /// Map a gateway failure, passing a backend status through
    pub fn passthrough(message: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| match source.status() {
            Some(status) => Self::Upstream {
                status,
                message,
                source,
            },
            None => Self::Backend { message, source },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            ServerError::Upstream { status, .. } => *status,
            ServerError::Backend { .. } | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ServerError::Validation(msg) => ErrorBody::new(msg.clone()),
            ServerError::Upstream { message, source, .. } => {
                tracing::warn!(status = %status, error = %source, "{}", message);
                ErrorBody::new(*message).with_message(format!("Backend returned {}", status.as_u16()))
            }
            ServerError::Backend { message, source } => {
                // Detail is logged, not exposed
                tracing::error!(error = %source, "{}", message);
                ErrorBody::new(*message)
            }
            ServerError::Internal(err) => {
                tracing::error!(error = ?err, "Internal server error");
                ErrorBody::new("Internal server error")
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Handler result alias
pub type Result<T> = std::result::Result<T, ServerError>;
