//! Patient model.
//!
//! A patient is a unit of demand: one visit is planned per patient per
//! schedule run. The first entry of `care_needs` is the primary need and
//! becomes the visit's care type.

use serde::{Deserialize, Serialize};

use super::{CareType, ClockTime};

/// A patient needing a home visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique patient identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Care needs, primary need first.
    pub care_needs: Vec<CareType>,
    /// Location (municipality/area) used for coverage matching.
    pub location: String,
    /// Street address of the visit.
    pub address: String,
    /// Preferred half of the day.
    pub preferred_time: PreferredTime,
    /// Clinical urgency.
    pub priority: Priority,
}

/// Preferred visit time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferredTime {
    Morning,
    Afternoon,
}

/// Patient urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    #[serde(alias = "normal")]
    Normal,
    #[serde(alias = "urgent")]
    Urgent,
}

impl PreferredTime {
    /// The fixed visit slot for this preference.
    pub fn slot(&self, morning: ClockTime, afternoon: ClockTime) -> ClockTime {
        match self {
            Self::Morning => morning,
            Self::Afternoon => afternoon,
        }
    }
}

impl Patient {
    /// Creates a patient with no care needs.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        preferred_time: PreferredTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            care_needs: Vec::new(),
            location: location.into(),
            address: String::new(),
            preferred_time,
            priority: Priority::Normal,
        }
    }

    /// Appends a care need. The first need added is the primary one.
    pub fn with_need(mut self, need: impl Into<CareType>) -> Self {
        self.care_needs.push(need.into());
        self
    }

    /// Sets the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// The primary care need, if any.
    pub fn primary_need(&self) -> Option<&CareType> {
        self.care_needs.first()
    }

    /// Whether this patient is marked urgent.
    pub fn is_urgent(&self) -> bool {
        self.priority == Priority::Urgent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_builder() {
        let p = Patient::new("105", "P. Laine", "Oulu", PreferredTime::Morning)
            .with_need(CareType::Geriatrics)
            .with_need("Palliative")
            .with_address("Puistokatu 3")
            .with_priority(Priority::Urgent);

        assert_eq!(p.primary_need(), Some(&CareType::Geriatrics));
        assert_eq!(p.care_needs.len(), 2);
        assert!(p.is_urgent());
        assert_eq!(p.address, "Puistokatu 3");
    }

    #[test]
    fn test_primary_need_empty() {
        let p = Patient::new("1", "X", "Oulu", PreferredTime::Afternoon);
        assert!(p.primary_need().is_none());
        assert!(!p.is_urgent());
    }

    #[test]
    fn test_preferred_time_slot() {
        let (am, pm) = (ClockTime::hour(9), ClockTime::hour(14));
        assert_eq!(PreferredTime::Morning.slot(am, pm), am);
        assert_eq!(PreferredTime::Afternoon.slot(am, pm), pm);
    }

    #[test]
    fn test_patient_deserializes_from_directory_json() {
        let json = r#"{
            "id": "102", "name": "T. Vikke", "careNeeds": ["Infection"],
            "location": "Oulu", "address": "Kalervantie 2",
            "preferredTime": "Afternoon", "priority": "Normal"
        }"#;
        let p: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(p.preferred_time, PreferredTime::Afternoon);
        assert_eq!(p.primary_need(), Some(&CareType::Infection));
    }
}
