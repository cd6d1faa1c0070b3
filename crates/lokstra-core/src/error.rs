//! Unified error handling for the core crate.
//!
//! Wraps the domain and application layers into one root type; the CLI maps
//! its categories onto exit codes and user-facing messages.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LokstraError {
    /// Grammar/validation violations.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration and infrastructure failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl LokstraError {
    /// Error category for CLI display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(ApplicationError::TemplateNotFound { .. }) => ErrorCategory::NotFound,
            Self::Application(_) => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type LokstraResult<T> = Result<T, LokstraError>;
