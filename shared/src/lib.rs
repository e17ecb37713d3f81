//! Shared types for the GoodFoods front end
//!
//! Wire records exchanged between the browser-facing proxy, the client view
//! models and the external backend: venues, reservations, agent messages and
//! the error body.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AgentMessage, AgentResponse, AgentResponseType, CancelResponse, ContactInfo,
    CreateReservationRequest, RecommendRequest, Reservation, ReservationStatus,
    StatusTransitionError, StructuredPayload, Venue, VenueSuggestion,
};
pub use response::ErrorBody;

/// Session scope used when a request carries no session token
pub const DEFAULT_SESSION_ID: &str = "default_session";
