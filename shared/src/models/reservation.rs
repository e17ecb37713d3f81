//! Reservation Model (预订)

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }

    /// Capitalised label for display (`Confirmed`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected status transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusTransitionError {
    #[error("Reservation {0} is already cancelled")]
    AlreadyCancelled(String),
}

/// Guest contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Reservation record as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub venue_id: String,
    /// Denormalized venue name
    pub venue_name: String,
    /// ISO-8601 datetime, naive values are UTC
    pub datetime: String,
    pub party_size: u32,
    pub status: ReservationStatus,
    pub contact: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Human-facing booking code (authoritative)
    pub booking_id: String,
}

impl Reservation {
    /// Start time, if the datetime string parses
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(&self.datetime)
    }

    /// Strictly after `now`. Unparseable datetimes count as past.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.starts_at().is_some_and(|start| start > now)
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }

    /// `pending | confirmed -> cancelled`
    ///
    /// Only called on explicit user cancellation.
    pub fn cancel(&mut self) -> Result<(), StatusTransitionError> {
        match self.status {
            ReservationStatus::Pending | ReservationStatus::Confirmed => {
                self.status = ReservationStatus::Cancelled;
                Ok(())
            }
            ReservationStatus::Cancelled => {
                Err(StatusTransitionError::AlreadyCancelled(self.id.clone()))
            }
        }
    }
}

/// Parse the backend's datetime strings.
///
/// Accepts RFC 3339 (`2025-12-01T19:00:00Z`, with offset) and naive
/// `YYYY-MM-DDTHH:MM[:SS[.fff]]`, the latter read as UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Create reservation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub venue_id: String,
    pub datetime: String,
    pub party_size: u32,
    pub contact: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Cancel reservation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_id: Option<String>,
}
