//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
///
/// Views never branch on the variant; they show [`ClientError::user_message`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, DNS, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },

    /// Body did not match the expected record
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request rejected locally before sending
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The single message shown to users
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(_) => "Unable to reach the reservation service".to_string(),
            ClientError::Status { message, .. } => message.clone(),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                "Unexpected response from the reservation service".to_string()
            }
            ClientError::Validation(msg) => msg.clone(),
        }
    }

    /// HTTP status of a non-success answer
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
