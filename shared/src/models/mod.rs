//! Data models
//!
//! Shared between the proxy server, the client view models and the backend
//! (via JSON). Field names follow the backend's snake_case wire format.

pub mod agent;
pub mod reservation;
pub mod venue;

// Re-exports
pub use agent::*;
pub use reservation::*;
pub use venue::*;
