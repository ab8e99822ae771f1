//! Infrastructure adapters for prakriya.
//!
//! This crate implements the ports defined in `prakriya-core::application::ports`.
//! It contains all external data formats and I/O operations.

pub mod deriver;
pub mod document_writer;
#[cfg(feature = "engine")]
pub mod engine;
pub mod filesystem;
pub mod lexicon;
pub mod lipi;
pub mod storage_name;
pub mod sutras;

// Re-export commonly used adapters
pub use deriver::{InMemoryDeriver, SnapshotDeriver, SnapshotRecord};
pub use document_writer::MarkdownWriter;
#[cfg(feature = "engine")]
pub use engine::{KoshaLexicon, VidyutDeriver};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use lexicon::{InMemoryLexicon, JsonLexicon, LexiconFile};
pub use lipi::Slp1Devanagari;
pub use storage_name::ItransStorageName;
pub use sutras::load_sutras;
