//! Application layer for prakriya.
//!
//! This layer contains:
//! - **Workbench**: the context struct holding every adapter
//! - **Services**: use case orchestration (lookup, formatting, enumeration,
//!   emission, dictionary dumps)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Grammatical values and document structure live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod workbench;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main services
pub use services::{
    DictionaryService, DocumentEmitter, Enumerator, LookupService, NominalAxes, SanadiTable,
    StemShard, SubantaMode, TraceFormatter, VerbalOptions,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Deriver, DocumentWriter, Filesystem, Lexicon, NameSanitizer, NoProgress, Progress,
    Transliterator,
};

pub use error::ApplicationError;
pub use workbench::{Workbench, WorkbenchBuilder};
