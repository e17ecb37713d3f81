//! GoodFoods Web Server - browser-facing proxy for the reservation backend
//!
//! Accepts the front end's `/api/*` calls, validates what it can locally and
//! forwards the rest to `BACKEND_URL` through the typed gateway from
//! `goodfoods-client`. Backend failures become a uniform `{error}` body.
//!
//! ```text
//! web-server/src/
//! ├── core/      # config, state, errors, server
//! ├── api/       # route modules and handlers
//! ├── routes/    # router assembly and middleware
//! └── utils/     # logging, validation
//! ```

pub mod api;
pub mod core;
pub mod routes;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use routes::{build_app, build_router};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    utils::init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    config
}
