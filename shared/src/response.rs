//! Error response body
//!
//! Every failed `/api/*` call answers with this shape:
//! ```json
//! {
//!     "error": "Failed to create reservation",
//!     "message": "Backend returned 500"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Error body returned by the proxy (and accepted from the backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// User-facing message
    pub error: String,
    /// Optional extra detail, never shown to users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
