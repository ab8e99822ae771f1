//! Unified error handling for Prakriya Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, and splits them into the two kinds the generator cares about:
//! recoverable misses that are logged and skipped, and fatal failures that
//! end the run.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Prakriya Core operations.
#[derive(Debug, Error, Clone)]
pub enum PrakriyaError {
    /// Errors from the domain layer (invalid categories or specifications).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (lookup, derivation, I/O).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PrakriyaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check the data paths in your config file".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in prakriya".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// A recoverable error aborts one lookup or one root, never the run.
    ///
    /// Only dictionary misses qualify; everything else propagates to the
    /// process boundary.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::LookupMiss { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type PrakriyaResult<T> = Result<T, PrakriyaError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> PrakriyaResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> PrakriyaResult<T> {
        self.map_err(|e| PrakriyaError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
