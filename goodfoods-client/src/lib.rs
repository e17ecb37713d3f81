//! GoodFoods Client - view models and HTTP gateway for the reservation backend
//!
//! Talks to either the web-server proxy or the backend directly; both expose
//! the same paths.

pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod http;
pub mod reservations;
pub mod session;
pub mod venues;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::{Gateway, HttpGateway};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::{
    FileSessionStore, MemorySessionStore, SessionError, SessionId, SessionProvider, SessionStore,
};

pub use chat::ChatPanel;
pub use dashboard::{DashboardRefresher, DashboardSnapshot, DashboardStats};
pub use reservations::ReservationList;
pub use venues::VenueFilter;
pub use wizard::{ReservationWizard, WizardError, WizardStep};

// Re-export shared types for convenience
pub use shared::models::{
    AgentMessage, AgentResponse, CancelResponse, CreateReservationRequest, RecommendRequest,
    Reservation, ReservationStatus, Venue, VenueSuggestion,
};
