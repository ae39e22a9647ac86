//! Input validation for directory catalogs.
//!
//! Checks structural integrity of staff and patient catalogs before they
//! are accepted into a directory. Detects:
//! - Empty IDs
//! - Duplicate IDs
//!
//! Matching outcomes are not validated here: a patient nobody can serve,
//! including one with no care needs, is a valid catalog entry and is
//! simply left unscheduled. Working hours are informational and may wrap
//! past midnight.

use crate::models::{Patient, Staff};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An entity has an empty ID.
    MissingId,
    /// Two entities of the same kind share an ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates staff and patient catalogs.
///
/// Checks:
/// 1. Every staff member and patient has a non-empty ID
/// 2. No duplicate staff IDs
/// 3. No duplicate patient IDs
///
/// Staff and patient IDs live in separate namespaces and may coincide.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_directory(staff: &[Staff], patients: &[Patient]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut staff_ids = HashSet::new();
    for s in staff {
        if s.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("Staff '{}' has an empty ID", s.name),
            ));
        } else if !staff_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", s.id),
            ));
        }
    }

    let mut patient_ids = HashSet::new();
    for p in patients {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("Patient '{}' has an empty ID", p.name),
            ));
        } else if !patient_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate patient ID: {}", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
