//! Staff model.
//!
//! Staff are the care professionals visits are assigned to. Each member
//! has a role, a set of care types they are qualified for, the locations
//! they cover and their daily working hours.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeRange;

/// Default daily hour cap for a staff member.
pub const DEFAULT_MAX_HOURS: u8 = 8;

/// A care professional that can be assigned visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Unique staff identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Professional role.
    pub role: Role,
    /// Care types this staff member is qualified for.
    pub expertise: Vec<CareType>,
    /// Locations this staff member travels to.
    pub coverage: Vec<String>,
    /// Daily working hours.
    pub available_hours: TimeRange,
    /// Daily hour cap.
    #[serde(default = "default_max_hours")]
    pub max_hours: u8,
}

fn default_max_hours() -> u8 {
    DEFAULT_MAX_HOURS
}

/// Staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Doctor,
    Nurse,
}

/// Category of medical need.
///
/// Known categories get their own variant; anything else is carried
/// verbatim in `Other`. Serialized as the plain category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CareType {
    Palliative,
    Acute,
    Infection,
    Geriatrics,
    /// Domain-specific category.
    Other(String),
}

impl CareType {
    /// Category name as written in directory documents.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Palliative => "Palliative",
            Self::Acute => "Acute",
            Self::Infection => "Infection",
            Self::Geriatrics => "Geriatrics",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for CareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CareType {
    fn from(value: &str) -> Self {
        match value {
            "Palliative" => Self::Palliative,
            "Acute" => Self::Acute,
            "Infection" => Self::Infection,
            "Geriatrics" => Self::Geriatrics,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for CareType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<CareType> for String {
    fn from(value: CareType) -> Self {
        match value {
            CareType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl Staff {
    /// Creates a staff member with no expertise or coverage yet.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        available_hours: TimeRange,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            expertise: Vec::new(),
            coverage: Vec::new(),
            available_hours,
            max_hours: DEFAULT_MAX_HOURS,
        }
    }

    /// Creates a doctor.
    pub fn doctor(id: impl Into<String>, name: impl Into<String>, hours: TimeRange) -> Self {
        Self::new(id, name, Role::Doctor, hours)
    }

    /// Creates a nurse.
    pub fn nurse(id: impl Into<String>, name: impl Into<String>, hours: TimeRange) -> Self {
        Self::new(id, name, Role::Nurse, hours)
    }

    /// Adds a care type to the expertise set (duplicates ignored).
    pub fn with_expertise(mut self, care_type: impl Into<CareType>) -> Self {
        let care_type = care_type.into();
        if !self.expertise.contains(&care_type) {
            self.expertise.push(care_type);
        }
        self
    }

    /// Adds a covered location (duplicates ignored).
    pub fn with_coverage(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        if !self.coverage.contains(&location) {
            self.coverage.push(location);
        }
        self
    }

    /// Sets the daily hour cap.
    pub fn with_max_hours(mut self, max_hours: u8) -> Self {
        self.max_hours = max_hours;
        self
    }

    /// Whether this staff member is qualified for a care type.
    pub fn has_expertise(&self, care_type: &CareType) -> bool {
        self.expertise.contains(care_type)
    }

    /// Whether any of the given needs falls within this member's expertise.
    pub fn covers_any_need(&self, needs: &[CareType]) -> bool {
        needs.iter().any(|need| self.has_expertise(need))
    }

    /// Whether this staff member travels to a location.
    pub fn covers_location(&self, location: &str) -> bool {
        self.coverage.iter().any(|l| l == location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours() -> TimeRange {
        "09:00-17:00".parse().unwrap()
    }

    #[test]
    fn test_staff_builder() {
        let s = Staff::doctor("1", "Dr. Pekka", hours())
            .with_expertise(CareType::Palliative)
            .with_expertise("Infection")
            .with_expertise(CareType::Palliative)
            .with_coverage("Oulu")
            .with_coverage("Kempele");

        assert_eq!(s.role, Role::Doctor);
        assert_eq!(s.expertise.len(), 2);
        assert!(s.has_expertise(&CareType::Infection));
        assert!(!s.has_expertise(&CareType::Acute));
        assert!(s.covers_location("Kempele"));
        assert!(!s.covers_location("Kiiminki"));
        assert_eq!(s.max_hours, DEFAULT_MAX_HOURS);
    }

    #[test]
    fn test_covers_any_need() {
        let s = Staff::nurse("5", "Nurse Sanna", hours()).with_expertise(CareType::Acute);
        assert!(s.covers_any_need(&[CareType::Geriatrics, CareType::Acute]));
        assert!(!s.covers_any_need(&[CareType::Palliative]));
        assert!(!s.covers_any_need(&[]));
    }

    #[test]
    fn test_care_type_strings() {
        assert_eq!(CareType::from("Acute"), CareType::Acute);
        assert_eq!(
            CareType::from("Wound care"),
            CareType::Other("Wound care".into())
        );
        assert_eq!(String::from(CareType::Geriatrics), "Geriatrics");
        assert_eq!(CareType::Other("Rehab".into()).to_string(), "Rehab");
    }

    #[test]
    fn test_staff_deserializes_from_directory_json() {
        let json = r#"{
            "id": "2", "name": "Dr. Teemu", "role": "Doctor",
            "expertise": ["Acute", "Geriatrics"],
            "coverage": ["Oulu", "Kiiminki"],
            "availableHours": "08:00-16:00"
        }"#;
        let s: Staff = serde_json::from_str(json).unwrap();
        assert_eq!(s.expertise, vec![CareType::Acute, CareType::Geriatrics]);
        assert_eq!(s.available_hours.to_string(), "08:00-16:00");
        assert_eq!(s.max_hours, 8);
    }
}
