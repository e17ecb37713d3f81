//! Reservation wizard
//!
//! A strictly linear four-step form:
//!
//! ```text
//! DateTime --next--> Contact --next--> Confirm --submit--> Success
//!    ^                  |  ^              |
//!    +------back--------+  +-----back-----+
//! ```
//!
//! Forward steps are gated by local required-field checks. A failed gate
//! sets the single visible error string; a passed gate clears it. Submission
//! happens once, from `Confirm`, and is never retried.

use chrono::NaiveDate;
use rand::Rng;
use shared::models::{ContactInfo, CreateReservationRequest, Reservation};
use thiserror::Error;

use crate::gateway::Gateway;
use crate::session::SessionId;

pub const DEFAULT_TIME: &str = "19:00";
pub const DEFAULT_PARTY_SIZE: u32 = 2;
pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 20;

pub const MSG_SELECT_DATETIME: &str = "Please select date and time";
pub const MSG_PARTY_SIZE: &str = "Party size must be between 1 and 20";
pub const MSG_CONTACT_DETAILS: &str = "Please fill in all contact details";

const BOOKING_CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    DateTime,
    Contact,
    Confirm,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Required fields missing; the message is also stored as the visible error
    #[error("{0}")]
    Incomplete(&'static str),

    #[error("Operation not allowed in step {0:?}")]
    InvalidStep(WizardStep),

    /// Submission failed; the message is also stored as the visible error
    #[error("{0}")]
    Submission(String),
}

/// Venue being booked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueRef {
    pub id: String,
    pub name: String,
}

impl VenueRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&shared::models::Venue> for VenueRef {
    fn from(venue: &shared::models::Venue) -> Self {
        Self::new(venue.id.clone(), venue.name.clone())
    }
}

/// In-memory draft, never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardDraft {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub party_size: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl WizardDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            time: DEFAULT_TIME.to_string(),
            party_size: DEFAULT_PARTY_SIZE,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            notes: String::new(),
        }
    }

    /// `{date}T{time}:00`
    pub fn datetime(&self) -> String {
        format!("{}T{}:00", self.date.trim(), self.time.trim())
    }

    fn has_datetime(&self) -> bool {
        !self.date.trim().is_empty() && !self.time.trim().is_empty()
    }

    fn has_contact(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// First gate the draft fails, in step order
    fn missing_field(&self) -> Option<&'static str> {
        if !self.has_datetime() {
            Some(MSG_SELECT_DATETIME)
        } else if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&self.party_size) {
            Some(MSG_PARTY_SIZE)
        } else if !self.has_contact() {
            Some(MSG_CONTACT_DETAILS)
        } else {
            None
        }
    }

    fn to_request(&self, venue: &VenueRef) -> CreateReservationRequest {
        let notes = self.notes.trim();
        CreateReservationRequest {
            venue_id: venue.id.clone(),
            datetime: self.datetime(),
            party_size: self.party_size,
            contact: ContactInfo {
                name: self.name.trim().to_string(),
                phone: self.phone.trim().to_string(),
                email: self.email.trim().to_string(),
            },
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

/// Outcome shown on the success screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub reservation: Reservation,
    /// Cosmetic code generated locally; `reservation.booking_id` is authoritative
    pub display_code: String,
}

/// Reservation wizard state machine
#[derive(Debug, Clone)]
pub struct ReservationWizard {
    venue: VenueRef,
    today: NaiveDate,
    step: WizardStep,
    draft: WizardDraft,
    error: Option<String>,
    confirmation: Option<Confirmation>,
}

impl ReservationWizard {
    pub fn new(venue: VenueRef, today: NaiveDate) -> Self {
        Self {
            venue,
            today,
            step: WizardStep::DateTime,
            draft: WizardDraft::new(today),
            error: None,
            confirmation: None,
        }
    }

    pub fn venue(&self) -> &VenueRef {
        &self.venue
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &WizardDraft {
        &self.draft
    }

    /// Editable on the `DateTime` and `Contact` steps only
    pub fn draft_mut(&mut self) -> Option<&mut WizardDraft> {
        matches!(self.step, WizardStep::DateTime | WizardStep::Contact).then_some(&mut self.draft)
    }

    /// The single visible error message
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Gate and advance `DateTime -> Contact` or `Contact -> Confirm`
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            WizardStep::DateTime => {
                if !self.draft.has_datetime() {
                    return self.reject(MSG_SELECT_DATETIME);
                }
                if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&self.draft.party_size) {
                    return self.reject(MSG_PARTY_SIZE);
                }
                WizardStep::Contact
            }
            WizardStep::Contact => {
                if !self.draft.has_contact() {
                    return self.reject(MSG_CONTACT_DETAILS);
                }
                WizardStep::Confirm
            }
            step => return Err(WizardError::InvalidStep(step)),
        };
        self.error = None;
        self.step = target;
        Ok(target)
    }

    /// `Contact -> DateTime` or `Confirm -> Contact`
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            WizardStep::Contact => WizardStep::DateTime,
            WizardStep::Confirm => WizardStep::Contact,
            step => return Err(WizardError::InvalidStep(step)),
        };
        self.error = None;
        self.step = target;
        Ok(target)
    }

    /// Submit the draft once. On failure the wizard stays at `Confirm`.
    pub async fn submit<G>(
        &mut self,
        gateway: &G,
        session: &SessionId,
    ) -> Result<&Confirmation, WizardError>
    where
        G: Gateway + ?Sized,
    {
        if self.step != WizardStep::Confirm {
            return Err(WizardError::InvalidStep(self.step));
        }
        if let Some(message) = self.draft.missing_field() {
            return self.reject(message);
        }
        self.error = None;

        let request = self.draft.to_request(&self.venue);
        match gateway.create_reservation(session, &request).await {
            Ok(reservation) => {
                self.step = WizardStep::Success;
                Ok(self.confirmation.insert(Confirmation {
                    reservation,
                    display_code: generate_display_code(),
                }))
            }
            Err(e) => {
                tracing::warn!(venue_id = %self.venue.id, error = %e, "Reservation submission failed");
                let message = e.user_message();
                self.error = Some(message.clone());
                Err(WizardError::Submission(message))
            }
        }
    }

    /// Close the modal. Discards the draft at any step.
    pub fn close(&mut self) {
        self.step = WizardStep::DateTime;
        self.draft = WizardDraft::new(self.today);
        self.error = None;
        self.confirmation = None;
    }

    fn reject<T>(&mut self, message: &'static str) -> Result<T, WizardError> {
        self.error = Some(message.to_string());
        Err(WizardError::Incomplete(message))
    }
}

/// `GF-` followed by 6 uppercase base36 characters
pub fn generate_display_code() -> String {
    let mut rng = rand::thread_rng();
    let code: String = (0..6)
        .map(|_| BOOKING_CODE_ALPHABET[rng.gen_range(0..BOOKING_CODE_ALPHABET.len())] as char)
        .collect();
    format!("GF-{}", code)
}
