//! API route modules
//!
//! - [`health`] - health check
//! - [`agent`] - conversational agent proxy
//! - [`reservations`] - reservation proxy
//! - [`venues`] - sample venue catalog

pub mod agent;
pub mod health;
pub mod reservations;
pub mod venues;
