//! Client configuration

/// Client configuration for connecting to the reservation service
///
/// The same configuration points either at the browser-facing proxy
/// (`http://localhost:3000`) or, from inside the proxy, at the backend
/// (`http://localhost:8000`). Both expose the same `/api/...` paths.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds. `None` leaves requests unbounded.
    pub timeout: Option<u64>,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            user_agent: format!("goodfoods-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create an HTTP gateway from this configuration
    pub fn build_gateway(&self) -> crate::ClientResult<crate::HttpGateway> {
        crate::HttpGateway::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
