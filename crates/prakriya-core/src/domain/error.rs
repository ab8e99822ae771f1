// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown {category} '{value}'")]
    UnknownCategory {
        category: &'static str,
        value: String,
    },

    #[error("Invalid specification: {0}")]
    InvalidSpecification(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Empty {what} is not allowed")]
    Empty { what: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCategory { category, value } => vec![
                format!("'{}' is not a known {}", value, category),
                "Category values are accepted in SLP1 (e.g. law, kartari) or by name (e.g. Lat, Kartari)"
                    .into(),
            ],
            Self::InvalidSpecification(msg) => vec![
                "Check the grammatical specification".into(),
                format!("Details: {}", msg),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCategory { .. }
            | Self::InvalidSpecification(_)
            | Self::MissingRequiredField { .. }
            | Self::Empty { .. } => ErrorCategory::Validation,
        }
    }
}
