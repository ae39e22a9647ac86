//! Directory store: the staff and patient catalogs for one facility/day.
//!
//! Catalogs are validated on construction and are read-only afterwards.
//! Catalog order is significant: the matching engine emits visits in
//! patient catalog order.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{CareType, ClockTime, Patient, PreferredTime, Priority, Staff, TimeRange};
use crate::validation::validate_directory;

/// Immutable staff and patient catalogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryStore {
    staff: Vec<Staff>,
    patients: Vec<Patient>,
}

impl DirectoryStore {
    /// Builds a directory, rejecting structurally invalid catalogs.
    pub fn new(staff: Vec<Staff>, patients: Vec<Patient>) -> EngineResult<Self> {
        validate_directory(&staff, &patients).map_err(EngineError::InvalidDirectory)?;
        for p in patients.iter().filter(|p| p.care_needs.is_empty()) {
            warn!(patient = %p.id, "patient has no care needs and will not be scheduled");
        }
        debug!(
            staff = staff.len(),
            patients = patients.len(),
            "directory loaded"
        );
        Ok(Self { staff, patients })
    }

    /// Parses a `{ "staff": [...], "patients": [...] }` document.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let doc: DirectoryStore = serde_json::from_str(json)?;
        Self::new(doc.staff, doc.patients)
    }

    /// Staff catalog, in load order.
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// Patient catalog, in load order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn find_staff(&self, staff_id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == staff_id)
    }

    pub fn find_patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == patient_id)
    }

    /// Every location covered by at least one staff member, first-seen order.
    pub fn coverage_areas(&self) -> Vec<&str> {
        let mut areas: Vec<&str> = Vec::new();
        for location in self.staff.iter().flat_map(|s| s.coverage.iter()) {
            if !areas.contains(&location.as_str()) {
                areas.push(location);
            }
        }
        areas
    }

    /// The demonstration catalog: five staff and five patients around Oulu.
    pub fn demo() -> Self {
        let hours = |open: u8, close: u8| {
            TimeRange::new(ClockTime::hour(open), ClockTime::hour(close))
        };

        let staff = vec![
            Staff::doctor("1", "Dr. Pekka", hours(9, 17))
                .with_expertise(CareType::Palliative)
                .with_expertise(CareType::Infection)
                .with_coverage("Oulu")
                .with_coverage("Kempele"),
            Staff::doctor("2", "Dr. Teemu", hours(8, 16))
                .with_expertise(CareType::Acute)
                .with_expertise(CareType::Geriatrics)
                .with_coverage("Oulu")
                .with_coverage("Kiiminki"),
            Staff::nurse("3", "Nurse Nuura", hours(9, 17))
                .with_expertise(CareType::Infection)
                .with_expertise(CareType::Palliative)
                .with_coverage("Oulu"),
            Staff::nurse("4", "Nurse Anne", hours(10, 18))
                .with_expertise(CareType::Palliative)
                .with_expertise(CareType::Geriatrics)
                .with_coverage("Kempele")
                .with_coverage("Kiiminki"),
            Staff::nurse("5", "Nurse Sanna", hours(8, 16))
                .with_expertise(CareType::Acute)
                .with_coverage("Oulu"),
        ];

        let patients = vec![
            Patient::new("101", "A. Marika", "Oulu", PreferredTime::Morning)
                .with_need(CareType::Palliative)
                .with_address("Isokatu 1")
                .with_priority(Priority::Urgent),
            Patient::new("102", "T. Vikke", "Oulu", PreferredTime::Afternoon)
                .with_need(CareType::Infection)
                .with_address("Kalervantie 2"),
            Patient::new("103", "T. Mäki", "Kiiminki", PreferredTime::Morning)
                .with_need(CareType::Acute)
                .with_address("Kivitie 5"),
            Patient::new("104", "Laouri", "Kempele", PreferredTime::Afternoon)
                .with_need(CareType::Palliative)
                .with_address("Kauppakuja 8"),
            Patient::new("105", "P. Laine", "Oulu", PreferredTime::Morning)
                .with_need(CareType::Geriatrics)
                .with_need(CareType::Palliative)
                .with_address("Puistokatu 3")
                .with_priority(Priority::Urgent),
        ];

        Self { staff, patients }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let d = DirectoryStore::demo();
        assert_eq!(d.staff().len(), 5);
        assert_eq!(d.patients().len(), 5);
        assert_eq!(d.find_staff("3").unwrap().name, "Nurse Nuura");
        assert_eq!(d.find_patient("104").unwrap().location, "Kempele");
        assert!(d.find_staff("99").is_none());
        assert!(validate_directory(d.staff(), d.patients()).is_ok());
    }

    #[test]
    fn test_coverage_areas_are_deduplicated() {
        let d = DirectoryStore::demo();
        assert_eq!(d.coverage_areas(), vec!["Oulu", "Kempele", "Kiiminki"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "staff": [{"id": "1", "name": "Dr. A", "role": "Doctor",
                       "expertise": ["Palliative"], "coverage": ["Oulu"],
                       "availableHours": "09:00-17:00"}],
            "patients": [{"id": "101", "name": "P", "careNeeds": ["Palliative"],
                          "location": "Oulu", "address": "Isokatu 1",
                          "preferredTime": "Morning", "priority": "Normal"}]
        }"#;
        let d = DirectoryStore::from_json(json).unwrap();
        assert_eq!(d.staff().len(), 1);
        assert_eq!(d.patients()[0].id, "101");
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{
            "staff": [],
            "patients": [
                {"id": "1", "name": "A", "careNeeds": ["Acute"], "location": "Oulu",
                 "address": "", "preferredTime": "Morning", "priority": "Normal"},
                {"id": "1", "name": "B", "careNeeds": ["Acute"], "location": "Oulu",
                 "address": "", "preferredTime": "Morning", "priority": "Normal"}
            ]
        }"#;
        let err = DirectoryStore::from_json(json).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDirectory(_)));
    }

    #[test]
    fn test_loads_needless_patient_and_overnight_staff() {
        let staff = vec![Staff::nurse(
            "1",
            "Nurse Nuura",
            TimeRange::new(ClockTime::hour(22), ClockTime::hour(6)),
        )
        .with_expertise(CareType::Palliative)
        .with_coverage("Oulu")];
        let patients = vec![
            Patient::new("101", "A. Marika", "Oulu", PreferredTime::Morning)
                .with_need(CareType::Palliative),
            Patient::new("102", "T. Vikke", "Oulu", PreferredTime::Afternoon),
        ];

        let d = DirectoryStore::new(staff, patients).unwrap();
        assert_eq!(d.staff()[0].available_hours.to_string(), "22:00-06:00");
        assert!(d.find_patient("102").unwrap().care_needs.is_empty());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = DirectoryStore::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }
}
