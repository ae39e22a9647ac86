//! Read-side views derived from a schedule.
//!
//! Every view is recomputed from the current schedule on each call;
//! nothing is cached, so views never go stale after a re-run.
//!
//! # Views
//!
//! | View | Definition |
//! |------|-----------|
//! | Workload | Visit count per staff member over a fixed daily capacity |
//! | Route | A staff member's visits as (location, time), schedule order |
//! | CSV | One row per visit under a fixed header |

use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;

use crate::error::EngineResult;
use crate::models::{ClockTime, Schedule, Staff};

/// CSV header line (without trailing newline).
pub const CSV_HEADER: &str =
    "Staff,Patient,Time,Location,Care Type,Duration (min),Travel Time (min),Status";

/// Visit load for one staff member.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffWorkload {
    pub staff_id: String,
    pub staff_name: String,
    /// Visits assigned in the schedule.
    pub visits: usize,
    /// Visits that count as a full day.
    pub capacity: u32,
}

impl StaffWorkload {
    /// Fraction of capacity used, clamped to 1.0 (0.0 for zero capacity).
    pub fn load_fraction(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.visits as f64 / f64::from(self.capacity)).min(1.0)
    }

    /// Whether assigned visits exceed capacity.
    pub fn is_overloaded(&self) -> bool {
        self.visits > self.capacity as usize
    }
}

/// One stop on a staff member's route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub location: String,
    pub address: String,
    pub time: ClockTime,
    pub patient_name: String,
}

/// Visit count per staff member, in staff catalog order.
///
/// Staff with no visits are listed with a count of zero.
pub fn workload(schedule: &Schedule, staff: &[Staff], capacity: u32) -> Vec<StaffWorkload> {
    staff
        .iter()
        .map(|s| StaffWorkload {
            staff_id: s.id.clone(),
            staff_name: s.name.clone(),
            visits: schedule.visit_count(&s.id),
            capacity,
        })
        .collect()
}

/// A staff member's stops in schedule order.
///
/// Stops are not resequenced by time or distance.
pub fn route(schedule: &Schedule, staff_id: &str) -> Vec<RouteStop> {
    schedule
        .entries_for_staff(staff_id)
        .into_iter()
        .map(|e| RouteStop {
            location: e.location.clone(),
            address: e.address.clone(),
            time: e.time,
            patient_name: e.patient_name.clone(),
        })
        .collect()
}

/// Renders the schedule as CSV, header first, one line per visit.
///
/// Fields are quoted only when they contain a delimiter, quote or line
/// break.
pub fn csv(schedule: &Schedule) -> EngineResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::with_capacity(CSV_HEADER.len() + 1 + schedule.len() * 64));
    writer.write_record(CSV_HEADER.split(','))?;

    for e in &schedule.entries {
        let time = e.time.to_string();
        let duration = e.duration_min.to_string();
        let travel = e.travel_time_min.to_string();
        writer.write_record([
            e.staff_name.as_str(),
            e.patient_name.as_str(),
            time.as_str(),
            e.location.as_str(),
            e.care_type.as_str(),
            duration.as_str(),
            travel.as_str(),
            e.status.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    // every field went in as &str
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
