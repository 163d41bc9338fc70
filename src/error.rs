//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by timetable generation and its collaborators.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// The requested program is not in the catalog.
    #[error("Program '{program_id}' not found.")]
    ProgramNotFound { program_id: String },

    /// The request cannot produce a timetable.
    #[error("{0}")]
    InvalidRequest(String),

    /// Structural validation failed.
    #[error("validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No scenario with the given id.
    #[error("Scenario '{scenario_id}' not found.")]
    ScenarioNotFound { scenario_id: String },

    /// A scenario store lock was poisoned by a panicking writer.
    #[error("scenario store lock poisoned")]
    StorePoisoned,
}

impl TimetableError {
    /// Whether the error denotes a missing entity (HTTP 404 territory).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TimetableError::ProgramNotFound { .. } | TimetableError::ScenarioNotFound { .. }
        )
    }
}

/// Crate result type.
pub type Result<T> = std::result::Result<T, TimetableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = TimetableError::ProgramNotFound {
            program_id: "X".into(),
        };
        assert_eq!(e.to_string(), "Program 'X' not found.");
        assert!(e.is_not_found());

        let e = TimetableError::InvalidRequest("empty".into());
        assert_eq!(e.to_string(), "empty");
        assert!(!e.is_not_found());
    }
}
