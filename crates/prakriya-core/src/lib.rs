//! Prakriya Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the prakriya
//! trace generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          prakriya-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Lookup, Formatter, Enumerator,        │
//! │   Emitter, Dictionary)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Lexicon, Deriver, Transliterator, ...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     prakriya-adapters (Infrastructure)  │
//! │ (JsonLexicon, SnapshotDeriver, lipi...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Categories, Specification, Prakriya,  │
//! │   TraceBlock, Section, Document)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prakriya_core::{
//!     application::{Enumerator, DocumentEmitter, VerbalOptions, Workbench},
//!     domain::{Dhatu, Gana},
//! };
//!
//! // 1. Assemble the workbench from adapters
//! let workbench = Workbench::builder()
//!     .lexicon(lexicon)
//!     .deriver(deriver)
//!     .transliterator(lipi)
//!     .sanitizer(sanitizer)
//!     .filesystem(filesystem)
//!     .writer(writer)
//!     .build()
//!     .unwrap();
//!
//! // 2. Enumerate and emit
//! let dhatu = Dhatu::mula("BU", Gana::Bhvadi);
//! let doc = Enumerator::new(&workbench)
//!     .tinanta(&dhatu, &VerbalOptions::default())
//!     .unwrap();
//! DocumentEmitter::new(&workbench)
//!     .emit(&doc, std::path::Path::new("./tiNantAni"))
//!     .unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DictionaryService, DocumentEmitter, Enumerator, LookupService, TraceFormatter,
        Workbench,
        ports::{
            Deriver, DocumentWriter, Filesystem, Lexicon, NameSanitizer, Progress,
            Transliterator,
        },
    };
    pub use crate::domain::{
        Dhatu, DhatuEntry, Document, EntryKind, LexicalEntry, Prakriya, Pratipadika,
        Section, Specification, SutraTable, TraceBlock, TraceBlocks,
    };
    pub use crate::error::{PrakriyaError, PrakriyaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
