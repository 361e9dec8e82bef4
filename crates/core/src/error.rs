//! Error types for the star field core.

use thiserror::Error;

pub type FieldResult<T> = Result<T, FieldError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    /// Rejected construction-time parameters (fov, grid size, field size).
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A pipeline stage produced a value its consumer cannot accept.
    ///
    /// Projection clamps every coordinate, so reaching this is a logic defect
    /// rather than a user-facing condition.
    #[error("Invariant violation: {message}")]
    InvariantViolation { message: String },
}

impl FieldError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }
}
