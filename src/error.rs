//! Engine error types.
//!
//! Operations fail only for two reasons: a required input is missing, or
//! the targeted record does not exist. An empty result is never an error.
//! Loading a directory document and writing CSV add their own I/O kinds.

use thiserror::Error;

use crate::validation::ValidationError;

pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("validation failed: {message}")]
    Validation { message: String },
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },
    #[error("invalid directory: {}", format_issues(.0))]
    InvalidDirectory(Vec<ValidationError>),
    #[error("failed to parse directory document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Kind of record an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Booking,
    Staff,
    Patient,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Booking => "booking",
            Self::Staff => "staff",
            Self::Patient => "patient",
        })
    }
}

impl EngineError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn not_found(entity: Entity, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Whether this is a missing/malformed input failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidDirectory(_))
    }

    /// Whether this is a missing-record failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn format_issues(issues: &[ValidationError]) -> String {
    issues
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
