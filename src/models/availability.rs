//! Staff availability submission model.
//!
//! Staff submit weekly availability windows for planners to review.
//! Submissions are stored as given: day names, time ordering and overlap
//! with earlier submissions are not checked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::humanized;
use super::ClockTime;

/// A submitted weekly availability window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySubmission {
    /// Ledger-assigned identifier.
    pub id: u64,
    /// Submitting staff ID.
    pub staff_id: String,
    /// Submitting staff name.
    pub staff_name: String,
    /// Weekday names the window applies to.
    pub days: Vec<String>,
    /// Window start.
    pub start_time: Option<ClockTime>,
    /// Window end.
    pub end_time: Option<ClockTime>,
    /// Requested daily hour cap.
    pub max_hours: Option<u8>,
    /// Locations the staff member is willing to cover.
    pub coverage_areas: Vec<String>,
    /// Free-form notes.
    pub notes: String,
    /// Submission time, serialized humanized.
    #[serde(with = "humanized")]
    pub submitted_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new availability submission.
///
/// Every field is optional at this layer; the ledger rejects a request
/// without `staff_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityRequest {
    pub staff_id: Option<String>,
    pub staff_name: Option<String>,
    pub days: Vec<String>,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub max_hours: Option<u8>,
    pub coverage_areas: Vec<String>,
    pub notes: Option<String>,
}

impl AvailabilityRequest {
    /// Creates a request for a staff member.
    pub fn for_staff(staff_id: impl Into<String>) -> Self {
        Self {
            staff_id: Some(staff_id.into()),
            ..Default::default()
        }
    }

    /// Sets the staff name.
    pub fn with_staff_name(mut self, name: impl Into<String>) -> Self {
        self.staff_name = Some(name.into());
        self
    }

    /// Adds a weekday.
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.days.push(day.into());
        self
    }

    /// Sets the daily window.
    pub fn with_window(mut self, start: ClockTime, end: ClockTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Sets the daily hour cap.
    pub fn with_max_hours(mut self, max_hours: u8) -> Self {
        self.max_hours = Some(max_hours);
        self
    }

    /// Adds a coverage area.
    pub fn with_coverage_area(mut self, area: impl Into<String>) -> Self {
        self.coverage_areas.push(area.into());
        self
    }

    /// Sets notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
