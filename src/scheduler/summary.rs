//! Schedule summary metrics.
//!
//! Computes headline figures for a schedule against the patient catalog
//! and facility capacity.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Visits | Planned visits |
//! | Unscheduled | Patients with no qualified staff |
//! | Urgent unscheduled | Unscheduled patients marked urgent |
//! | Total / avg travel | Sum and mean of simulated travel minutes |
//! | Capacity use | Patients / facility daily capacity |

use serde::Serialize;

use crate::models::{Patient, Schedule};

/// Headline schedule figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub visits: usize,
    pub unscheduled: Vec<String>,
    pub urgent_unscheduled: usize,
    pub total_travel_min: u32,
    pub avg_travel_min: f64,
    /// Patients in the catalog (today's demand).
    pub demand: usize,
    /// Facility visit capacity.
    pub capacity: u32,
}

impl ScheduleSummary {
    /// Computes the summary of a schedule.
    ///
    /// # Arguments
    /// * `schedule` - The generated schedule.
    /// * `patients` - The patient catalog it was generated from.
    /// * `capacity` - Facility-wide visits per day.
    pub fn calculate(schedule: &Schedule, patients: &[Patient], capacity: u32) -> Self {
        let mut unscheduled = Vec::new();
        let mut urgent_unscheduled = 0;

        for patient in patients {
            if schedule.entry_for_patient(&patient.id).is_none() {
                unscheduled.push(patient.id.clone());
                if patient.is_urgent() {
                    urgent_unscheduled += 1;
                }
            }
        }

        let total_travel_min = schedule.total_travel_min();
        let avg_travel_min = if schedule.is_empty() {
            0.0
        } else {
            f64::from(total_travel_min) / schedule.len() as f64
        };

        Self {
            visits: schedule.len(),
            unscheduled,
            urgent_unscheduled,
            total_travel_min,
            avg_travel_min,
            demand: patients.len(),
            capacity,
        }
    }

    /// Demand over capacity (0.0 when capacity is zero).
    pub fn capacity_use(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.demand as f64 / f64::from(self.capacity)
        }
    }

    /// Whether every patient received a visit.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CareType, ClockTime, PreferredTime, Priority, ScheduleEntry, VisitStatus};

    fn patient(id: &str, priority: Priority) -> Patient {
        Patient::new(id, id, "Oulu", PreferredTime::Morning)
            .with_need(CareType::Acute)
            .with_priority(priority)
    }

    fn visit(patient_id: &str, travel: u16) -> ScheduleEntry {
        ScheduleEntry {
            staff_id: "5".into(),
            staff_name: "Nurse Sanna".into(),
            patient_id: patient_id.into(),
            patient_name: patient_id.into(),
            care_type: CareType::Acute,
            time: ClockTime::hour(9),
            location: "Oulu".into(),
            address: String::new(),
            duration_min: 45,
            travel_time_min: travel,
            status: VisitStatus::Scheduled,
        }
    }

    #[test]
    fn test_summary_basic() {
        let patients = vec![
            patient("101", Priority::Normal),
            patient("102", Priority::Urgent),
            patient("103", Priority::Normal),
        ];
        let mut s = Schedule::new();
        s.add_entry(visit("101", 10));
        s.add_entry(visit("103", 30));

        let sum = ScheduleSummary::calculate(&s, &patients, 30);
        assert_eq!(sum.visits, 2);
        assert_eq!(sum.unscheduled, vec!["102".to_string()]);
        assert_eq!(sum.urgent_unscheduled, 1);
        assert_eq!(sum.total_travel_min, 40);
        assert!((sum.avg_travel_min - 20.0).abs() < 1e-10);
        assert!((sum.capacity_use() - 0.1).abs() < 1e-10);
        assert!(!sum.is_complete());
    }

    #[test]
    fn test_summary_empty() {
        let sum = ScheduleSummary::calculate(&Schedule::new(), &[], 0);
        assert_eq!(sum.visits, 0);
        assert!((sum.avg_travel_min - 0.0).abs() < 1e-10);
        assert!((sum.capacity_use() - 0.0).abs() < 1e-10);
        assert!(sum.is_complete());
    }
}
