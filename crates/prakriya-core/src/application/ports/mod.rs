//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `prakriya-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Lexicon`: dictionary entries for surface forms
//!   - `Deriver`: the external derivation engine
//!   - `Transliterator`: SLP1 ↔ display script
//!   - `NameSanitizer`: titles → filesystem-safe names
//!   - `Filesystem` / `DocumentWriter`: persistence
//!   - `Progress`: progress reporting for long dumps
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Deriver, DocumentWriter, Filesystem, Lexicon, NameSanitizer, NoProgress, Progress,
    Transliterator,
};

#[cfg(test)]
pub use output::{MockDeriver, MockLexicon};
