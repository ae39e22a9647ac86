//! Care coordinator: the owned working set for one facility/day.
//!
//! Holds the directory, the current schedule, both ledgers, the engine
//! configuration and the random source, and exposes every engine
//! operation to the outer (HTTP, CLI) layer.
//!
//! # Concurrency
//! Single writer. Mutating operations take `&mut self`; sharing one
//! coordinator across threads requires an outer lock. A schedule run
//! blocks for the configured processing delay and cannot be cancelled.

mod views;

pub use views::{
    Capacity, CoordinatorOverview, PatientView, ProfessionalDashboard, SupervisorOverview,
    SupervisorRules,
};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::directory::DirectoryStore;
use crate::error::{EngineError, EngineResult, Entity};
use crate::ledger::{AvailabilityLedger, BookingLedger, SlotAvailability};
use crate::models::{
    AvailabilityRequest, AvailabilitySubmission, Booking, BookingRequest, BookingStatus, Schedule,
    Staff,
};
use crate::scheduler::{projection, MatchingEngine, RouteStop, ScheduleSummary, StaffWorkload};

/// Owns all engine state; one instance per facility/day.
///
/// # Example
///
/// ```
/// use homecare_schedule::{CareCoordinator, DirectoryStore, EngineConfig};
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use std::time::Duration;
///
/// let config = EngineConfig::default().with_processing_delay(Duration::ZERO);
/// let mut coordinator =
///     CareCoordinator::with_rng(DirectoryStore::demo(), config, SmallRng::seed_from_u64(1));
///
/// let visits = coordinator.generate_schedule().len();
/// assert_eq!(visits, 5);
/// assert!(coordinator.schedule_csv()?.starts_with("Staff,Patient,Time"));
/// # Ok::<(), homecare_schedule::EngineError>(())
/// ```
#[derive(Debug)]
pub struct CareCoordinator<R = StdRng> {
    config: EngineConfig,
    directory: DirectoryStore,
    engine: MatchingEngine,
    schedule: Schedule,
    availability: AvailabilityLedger,
    bookings: BookingLedger,
    rng: R,
}

impl CareCoordinator<StdRng> {
    /// Creates a coordinator with default configuration and an OS-seeded
    /// random source.
    pub fn new(directory: DirectoryStore) -> Self {
        Self::with_config(directory, EngineConfig::default())
    }

    /// Creates a coordinator with an OS-seeded random source.
    pub fn with_config(directory: DirectoryStore, config: EngineConfig) -> Self {
        Self::with_rng(directory, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> CareCoordinator<R> {
    /// Creates a coordinator with an explicit random source.
    ///
    /// An initial schedule is generated immediately, without the
    /// processing delay.
    pub fn with_rng(directory: DirectoryStore, config: EngineConfig, mut rng: R) -> Self {
        let engine = MatchingEngine::with_config(config.clone());
        let schedule = engine.generate(directory.staff(), directory.patients(), &mut rng);
        Self {
            bookings: BookingLedger::with_config(&config),
            availability: AvailabilityLedger::new(),
            config,
            directory,
            engine,
            schedule,
            rng,
        }
    }

    /// Recomputes the schedule and replaces the current one wholesale.
    ///
    /// Blocks for the configured processing delay first. Re-runs may
    /// assign different staff and travel times; the set of scheduled
    /// patients only changes when the directory does.
    pub fn generate_schedule(&mut self) -> &Schedule {
        let delay = self.config.processing_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.schedule = self.engine.generate(
            self.directory.staff(),
            self.directory.patients(),
            &mut self.rng,
        );
        let summary = self.summary();
        info!(
            visits = summary.visits,
            unscheduled = summary.unscheduled.len(),
            urgent_unscheduled = summary.urgent_unscheduled,
            capacity_use = summary.capacity_use(),
            complete = summary.is_complete(),
            "schedule replaced"
        );
        &self.schedule
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn directory(&self) -> &DirectoryStore {
        &self.directory
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Headline figures for the current schedule.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::calculate(
            &self.schedule,
            self.directory.patients(),
            self.config.daily_capacity,
        )
    }

    pub fn submit_availability(
        &mut self,
        request: AvailabilityRequest,
    ) -> EngineResult<AvailabilitySubmission> {
        self.availability.submit(request)
    }

    pub fn list_availability(&self, staff_id: &str) -> &[AvailabilitySubmission] {
        self.availability.list(staff_id)
    }

    /// Removes a submission if present.
    ///
    /// Returns `false` when nothing matched. That is not a failure: deleting
    /// an unknown or already-deleted submission leaves the ledger unchanged.
    pub fn delete_availability(&mut self, staff_id: &str, submission_id: u64) -> bool {
        self.availability.delete(staff_id, submission_id)
    }

    pub fn all_availability(&self) -> &BTreeMap<String, Vec<AvailabilitySubmission>> {
        self.availability.all()
    }

    pub fn create_booking(&mut self, request: BookingRequest) -> EngineResult<Booking> {
        self.bookings.create(request)
    }

    pub fn bookings_for_patient(&self, patient_id: &str) -> &[Booking] {
        self.bookings.list_by_patient(patient_id)
    }

    pub fn bookings_for_professional(&self, professional_id: &str) -> Vec<&Booking> {
        self.bookings.list_by_professional(professional_id)
    }

    pub fn all_bookings(&self) -> Vec<&Booking> {
        self.bookings.all()
    }

    pub fn update_booking_status(
        &mut self,
        booking_id: u64,
        status: BookingStatus,
        notes: Option<String>,
    ) -> EngineResult<Booking> {
        self.bookings.update_status(booking_id, status, notes)
    }

    pub fn cancel_booking(&mut self, booking_id: u64) -> EngineResult<Booking> {
        self.bookings.cancel(booking_id)
    }

    /// Free grid slots for a professional on a date, matched as text
    /// against booking dates.
    pub fn available_slots(&self, professional_id: &str, date: &str) -> SlotAvailability {
        self.bookings
            .available_slots(professional_id, date, &self.config.booking_grid())
    }

    /// Visit load for every staff member, in catalog order.
    ///
    /// Staff over `max_daily_visits` are reported, not rebalanced.
    pub fn workload(&self) -> Vec<StaffWorkload> {
        let workload = projection::workload(
            &self.schedule,
            self.directory.staff(),
            self.config.max_daily_visits,
        );
        for w in workload.iter().filter(|w| w.is_overloaded()) {
            warn!(
                staff = %w.staff_id,
                visits = w.visits,
                load = w.load_fraction(),
                "staff over daily visit capacity"
            );
        }
        workload
    }

    /// A staff member's stops in schedule order.
    pub fn route(&self, staff_id: &str) -> EngineResult<Vec<RouteStop>> {
        self.require_staff(staff_id)?;
        Ok(projection::route(&self.schedule, staff_id))
    }

    /// The current schedule as CSV.
    pub fn schedule_csv(&self) -> EngineResult<String> {
        projection::csv(&self.schedule)
    }

    pub fn coordinator_overview(&self) -> CoordinatorOverview<'_> {
        CoordinatorOverview {
            staff: self.directory.staff(),
            patients: self.directory.patients(),
            schedule: &self.schedule,
            today_capacity: Capacity {
                current: self.directory.patients().len(),
                max: self.config.daily_capacity,
            },
        }
    }

    pub fn supervisor_overview(&self) -> SupervisorOverview<'_> {
        SupervisorOverview {
            schedule: &self.schedule,
            workload: self.workload(),
            rules: SupervisorRules {
                max_travel_time: self.config.max_travel_time_min,
                coverage: self.directory.coverage_areas(),
                max_workload: self.config.max_daily_visits,
            },
        }
    }

    pub fn professional_dashboard(&self, staff_id: &str) -> EngineResult<ProfessionalDashboard<'_>> {
        let staff = self.require_staff(staff_id)?;
        Ok(ProfessionalDashboard {
            staff,
            schedule: self.schedule.entries_for_staff(staff_id),
            route: projection::route(&self.schedule, staff_id),
        })
    }

    pub fn patient_view(&self, patient_id: &str) -> EngineResult<PatientView<'_>> {
        let patient = self.directory.find_patient(patient_id).ok_or_else(|| {
            warn!(patient = %patient_id, "unknown patient");
            EngineError::not_found(Entity::Patient, patient_id)
        })?;
        Ok(PatientView {
            patient,
            upcoming_visit: self.schedule.entry_for_patient(patient_id),
        })
    }

    fn require_staff(&self, staff_id: &str) -> EngineResult<&Staff> {
        self.directory.find_staff(staff_id).ok_or_else(|| {
            warn!(staff = %staff_id, "unknown staff");
            EngineError::not_found(Entity::Staff, staff_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, PreferredTime};
    use rand::rngs::SmallRng;
    use std::time::Duration;

    fn coordinator(seed: u64) -> CareCoordinator<SmallRng> {
        let config = EngineConfig::default().with_processing_delay(Duration::ZERO);
        CareCoordinator::with_rng(DirectoryStore::demo(), config, SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn test_initial_schedule_is_generated() {
        let c = coordinator(1);
        assert_eq!(c.schedule().len(), 5);
    }

    #[test]
    fn test_generate_replaces_schedule() {
        let mut c = coordinator(2);
        let before = c.schedule().clone();
        let mut changed = false;
        for _ in 0..20 {
            let after = c.generate_schedule().clone();
            assert_eq!(after.len(), before.len());
            changed |= after != before;
        }
        // random travel times make identical reruns vanishingly unlikely
        assert!(changed);
    }

    #[test]
    fn test_workload_sums_to_schedule_len() {
        let c = coordinator(3);
        let w = c.workload();
        assert_eq!(w.len(), 5);
        assert_eq!(w.iter().map(|w| w.visits).sum::<usize>(), c.schedule().len());
        assert!(w.iter().all(|w| w.capacity == 8));
    }

    #[test]
    fn test_route_unknown_staff() {
        let c = coordinator(4);
        assert!(c.route("99").unwrap_err().is_not_found());
        assert!(c.route("5").is_ok());
    }

    #[test]
    fn test_route_matches_dashboard() {
        let c = coordinator(5);
        for s in c.directory().staff() {
            let dash = c.professional_dashboard(&s.id).unwrap();
            assert_eq!(dash.route, c.route(&s.id).unwrap());
            assert_eq!(dash.schedule.len(), dash.route.len());
        }
    }

    #[test]
    fn test_patient_view() {
        let c = coordinator(6);
        let v = c.patient_view("101").unwrap();
        assert_eq!(v.patient.name, "A. Marika");
        let visit = v.upcoming_visit.unwrap();
        assert_eq!(visit.time, ClockTime::hour(9));
        assert_eq!(v.patient.preferred_time, PreferredTime::Morning);
        assert!(c.patient_view("999").unwrap_err().is_not_found());
    }

    #[test]
    fn test_overviews() {
        let c = coordinator(7);
        let o = c.coordinator_overview();
        assert_eq!(o.today_capacity, Capacity { current: 5, max: 30 });

        let s = c.supervisor_overview();
        assert_eq!(s.rules.max_travel_time, 30);
        assert_eq!(s.rules.max_workload, 8);
        assert_eq!(s.rules.coverage, vec!["Oulu", "Kempele", "Kiiminki"]);

        let json = serde_json::to_value(&o).unwrap();
        assert_eq!(json["todayCapacity"]["max"], 30);
    }

    #[test]
    fn test_available_slots_match_date_text() {
        let mut c = coordinator(8);
        c.create_booking(BookingRequest::new("101", "3", "2026-10-20", "09:00"))
            .unwrap();
        let slots = c.available_slots("3", "2026-10-20");
        assert_eq!(slots.available_slots.len(), 7);
        assert_eq!(slots.booked_count, 1);

        let other = c.available_slots("3", "tomorrow");
        assert_eq!(other.available_slots.len(), 8);
        assert_eq!(other.booked_count, 0);
    }

    #[test]
    fn test_delete_unknown_availability_reports_nothing_removed() {
        let mut c = coordinator(10);
        let sub = c
            .submit_availability(AvailabilityRequest::for_staff("3"))
            .unwrap();
        assert!(!c.delete_availability("3", sub.id + 1));
        assert_eq!(c.list_availability("3").len(), 1);
        assert!(c.delete_availability("3", sub.id));
        assert!(!c.delete_availability("3", sub.id));
    }

    #[test]
    fn test_summary() {
        let c = coordinator(9);
        let s = c.summary();
        assert_eq!(s.visits, 5);
        assert!(s.is_complete());
        assert_eq!(s.capacity, 30);
    }
}
