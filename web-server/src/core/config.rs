/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | Listen port |
/// | BACKEND_URL | http://localhost:8000 | Reservation/agent backend |
/// | ENVIRONMENT | development | development, staging or production |
/// | LOG_LEVEL | info | Default tracing filter when `RUST_LOG` is unset |
/// | LOG_JSON | false | Emit JSON log lines |
/// | LOG_DIR | (unset) | Write daily rolling log files here instead of stdout (created if missing) |
///
/// # Example
///
/// ```ignore
/// BACKEND_URL=http://api.internal:8000 HTTP_PORT=8080 cargo run -p web-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Base URL every `/api/...` call is forwarded to
    pub backend_url: String,
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

impl Config {
    /// Load from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            backend_url: std::env::var("BACKEND_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.trim().is_empty()),
        }
    }

    /// Defaults with a specific backend, for tests
    pub fn with_backend(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            backend_url: DEFAULT_BACKEND_URL.into(),
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}
