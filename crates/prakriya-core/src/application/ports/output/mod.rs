//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `prakriya-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{DhatuEntry, Document, LexicalEntry, Prakriya, PratipadikaEntry, Specification};
use crate::error::PrakriyaResult;

/// Port for dictionary lookups.
///
/// Implemented by:
/// - `prakriya_adapters::engine::KoshaLexicon` (production)
/// - `prakriya_adapters::lexicon::JsonLexicon` (offline fixtures)
/// - `prakriya_adapters::lexicon::InMemoryLexicon` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Lexicon: Send + Sync {
    /// All entries whose surface form is `key` (SLP1). Empty if none.
    fn get(&self, key: &str) -> PrakriyaResult<Vec<LexicalEntry>>;

    /// Every root the lexicon knows.
    fn dhatus(&self) -> PrakriyaResult<Vec<DhatuEntry>>;

    /// Every nominal stem the lexicon knows.
    fn pratipadikas(&self) -> PrakriyaResult<Vec<PratipadikaEntry>>;
}

/// Port for the derivation engine.
///
/// Each call is independent and deterministic for a given specification and
/// rule-set version. An empty result means the combination does not exist.
///
/// Implemented by:
/// - `prakriya_adapters::engine::VidyutDeriver` (production)
/// - `prakriya_adapters::deriver::SnapshotDeriver` (offline fixtures)
/// - `prakriya_adapters::deriver::InMemoryDeriver` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Deriver: Send + Sync {
    fn derive(&self, spec: &Specification) -> PrakriyaResult<Vec<Prakriya>>;
}

/// Port for transliteration between the engine's internal encoding (SLP1)
/// and the display script (Devanagari).
pub trait Transliterator: Send + Sync {
    fn to_display(&self, internal: &str) -> String;

    fn to_internal(&self, display: &str) -> String;
}

/// Port for turning a display title into a filesystem-safe file stem.
pub trait NameSanitizer: Send + Sync {
    fn storage_name(&self, title: &str) -> String;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `prakriya_adapters::filesystem::LocalFilesystem` (production)
/// - `prakriya_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PrakriyaResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> PrakriyaResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for persisting a document (metadata + body) at a path.
pub trait DocumentWriter: Send + Sync {
    fn write(&self, path: &Path, document: &Document) -> PrakriyaResult<()>;
}

/// Port for progress reporting during long dumps.
pub trait Progress {
    fn start(&self, label: &str, total: Option<u64>);

    fn advance(&self);

    fn finish(&self, message: &str);
}

/// Progress sink that reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&self, _label: &str, _total: Option<u64>) {}

    fn advance(&self) {}

    fn finish(&self, _message: &str) {}
}
