//! Schedule (solution) model.
//!
//! A schedule is the ordered list of planned visits produced by one
//! matching run. It is replaced wholesale on every run; entries are never
//! merged with a previous schedule.

use serde::{Deserialize, Serialize};

use super::{CareType, ClockTime};

/// A complete set of planned visits, in patient catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Planned visits.
    pub entries: Vec<ScheduleEntry>,
}

/// One planned visit: a staff member seeing a patient at a fixed slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Assigned staff ID.
    pub staff_id: String,
    /// Assigned staff name (denormalized for display).
    pub staff_name: String,
    /// Visited patient ID.
    pub patient_id: String,
    /// Visited patient name (denormalized for display).
    pub patient_name: String,
    /// Care delivered; the patient's primary need.
    pub care_type: CareType,
    /// Visit start time.
    pub time: ClockTime,
    /// Patient location.
    pub location: String,
    /// Patient street address.
    pub address: String,
    /// Visit length (minutes).
    #[serde(rename = "duration")]
    pub duration_min: u16,
    /// Estimated travel time to the visit (minutes).
    #[serde(rename = "travelTime")]
    pub travel_time_min: u16,
    /// Visit status.
    pub status: VisitStatus,
}

/// Lifecycle state of a planned visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisitStatus {
    /// Planned by a matching run.
    #[default]
    Scheduled,
}

impl VisitStatus {
    /// Status label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visit.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of planned visits.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no visits are planned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visits assigned to a staff member, in schedule order.
    pub fn entries_for_staff(&self, staff_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.staff_id == staff_id)
            .collect()
    }

    /// The first planned visit for a patient.
    pub fn entry_for_patient(&self, patient_id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.patient_id == patient_id)
    }

    /// Number of visits assigned to a staff member.
    pub fn visit_count(&self, staff_id: &str) -> usize {
        self.entries.iter().filter(|e| e.staff_id == staff_id).count()
    }

    /// Total travel time across all visits (minutes).
    pub fn total_travel_min(&self) -> u32 {
        self.entries
            .iter()
            .map(|e| u32::from(e.travel_time_min))
            .sum()
    }
}
