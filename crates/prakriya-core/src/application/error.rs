//! Application layer errors.
//!
//! These errors represent failures in orchestration, not grammar.
//! Invalid categories and specifications are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::EntryKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No lexicon entry for a surface form (after kind filtering).
    #[error("{}", lookup_miss_message(surface, *kind))]
    LookupMiss {
        surface: String,
        kind: Option<EntryKind>,
    },

    /// The derivation engine rejected a specification.
    #[error("Derivation failed for {spec}: {reason}")]
    DerivationFailed { spec: String, reason: String },

    /// Rendering a document failed.
    #[error("Document rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A data file (lexicon, snapshot, sutra table) could not be loaded.
    #[error("Failed to load {what} from {path}: {reason}")]
    DataLoad {
        what: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// Store access failed (lock poisoned, etc.).
    #[error("In-memory store error")]
    StoreLockError,

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

fn lookup_miss_message(surface: &str, kind: Option<EntryKind>) -> String {
    match kind {
        Some(kind) => format!("Can't get {kind} entry for {surface}"),
        None => format!("Can't get entry for {surface}"),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LookupMiss { surface, kind } => {
                let mut out = vec![format!("'{}' is not in the lexicon", surface)];
                if kind.is_some() {
                    out.push("Try again without --kind to see every entry".into());
                }
                out.push("Check the spelling (Devanagari or SLP1)".into());
                out
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::DataLoad { path, what, .. } => vec![
                format!("Could not read the {} at {}", what, path.display()),
                "Check the data paths: prakriya config list".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LookupMiss { .. } => ErrorCategory::NotFound,
            Self::DerivationFailed { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::DataLoad { .. } | Self::AdapterNotConfigured { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}
