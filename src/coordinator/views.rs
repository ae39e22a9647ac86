//! Role-specific read views over the coordinator's state.
//!
//! Views borrow from the coordinator and serialize to the JSON shapes the
//! dashboards consume.

use serde::Serialize;

use crate::models::{Patient, Schedule, ScheduleEntry, Staff};
use crate::scheduler::{RouteStop, StaffWorkload};

/// Today's demand against facility capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capacity {
    pub current: usize,
    pub max: u32,
}

/// Everything a coordinator sees: catalogs, schedule and capacity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorOverview<'a> {
    pub staff: &'a [Staff],
    pub patients: &'a [Patient],
    pub schedule: &'a Schedule,
    pub today_capacity: Capacity,
}

/// Planning rules published to supervisors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorRules<'a> {
    pub max_travel_time: u16,
    pub coverage: Vec<&'a str>,
    pub max_workload: u32,
}

/// Schedule with per-staff workload and the rules it is judged by.
#[derive(Debug, Clone, Serialize)]
pub struct SupervisorOverview<'a> {
    pub schedule: &'a Schedule,
    pub workload: Vec<StaffWorkload>,
    pub rules: SupervisorRules<'a>,
}

/// A staff member's own day.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalDashboard<'a> {
    pub staff: &'a Staff,
    pub schedule: Vec<&'a ScheduleEntry>,
    pub route: Vec<RouteStop>,
}

/// A patient's record and next planned visit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientView<'a> {
    pub patient: &'a Patient,
    pub upcoming_visit: Option<&'a ScheduleEntry>,
}
