//! Patient booking model.
//!
//! A booking is a patient's request for an appointment with a specific
//! professional at a date and hourly time. Date and time are kept exactly
//! as the caller wrote them; slot queries compare them as text. Bookings
//! move through
//! `pending → confirmed → completed`; cancellation removes the booking
//! from the ledger rather than flagging it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::timestamp::humanized;
use super::Priority;

/// A patient appointment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Ledger-wide identifier, never reused.
    pub id: u64,
    pub patient_id: String,
    pub patient_name: String,
    pub patient_phone: Option<String>,
    pub patient_email: Option<String>,
    pub professional_id: String,
    pub professional_name: String,
    pub service_type: String,
    /// Appointment date, conventionally `YYYY-MM-DD`.
    pub booking_date: String,
    /// Appointment time, conventionally `HH:MM`.
    pub booking_time: String,
    /// Free-form length, e.g. "1 hour".
    pub duration: String,
    pub location: String,
    pub notes: String,
    pub preferred_language: String,
    pub priority: Priority,
    pub status: BookingStatus,
    #[serde(with = "humanized")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "humanized::option")]
    pub confirmed_at: Option<DateTime<Utc>>,
    #[serde(default, with = "humanized::option")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Booking lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Status label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether `self → next` follows the forward lifecycle.
    ///
    /// Allowed: staying put, `pending → confirmed`, `confirmed → completed`,
    /// and any state to `cancelled`.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        *self == next
            || matches!(
                (*self, next),
                (Pending, Confirmed) | (Confirmed, Completed) | (_, Cancelled)
            )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied fields for a new booking.
///
/// `patient_id`, `professional_id`, `booking_date` and `booking_time` are
/// required; empty strings count as missing. Their format is not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub patient_phone: Option<String>,
    pub patient_email: Option<String>,
    pub professional_id: Option<String>,
    pub professional_name: Option<String>,
    pub service_type: Option<String>,
    pub booking_date: Option<String>,
    pub booking_time: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub preferred_language: Option<String>,
    pub priority: Option<Priority>,
}

impl BookingRequest {
    /// Creates a request carrying the four required fields.
    pub fn new(
        patient_id: impl Into<String>,
        professional_id: impl Into<String>,
        booking_date: impl Into<String>,
        booking_time: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: Some(patient_id.into()),
            professional_id: Some(professional_id.into()),
            booking_date: Some(booking_date.into()),
            booking_time: Some(booking_time.into()),
            ..Default::default()
        }
    }

    /// Sets the patient name.
    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }

    /// Sets the professional name.
    pub fn with_professional_name(mut self, name: impl Into<String>) -> Self {
        self.professional_name = Some(name.into());
        self
    }

    /// Sets the service type.
    pub fn with_service_type(mut self, service: impl Into<String>) -> Self {
        self.service_type = Some(service.into());
        self
    }

    /// Sets contact details.
    pub fn with_contact(mut self, phone: impl Into<String>, email: impl Into<String>) -> Self {
        self.patient_phone = Some(phone.into());
        self.patient_email = Some(email.into());
        self
    }

    /// Sets notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl Booking {
    /// Whether this booking occupies a professional's slot on a date.
    pub fn occupies(&self, professional_id: &str, date: &str) -> bool {
        self.professional_id == professional_id && self.booking_date == date
    }
}
