//! Core domain layer for prakriya.
//!
//! Pure types with no I/O: the grammatical categories the enumerators walk,
//! the specifications handed to the derivation engine, the traces it returns,
//! and the heading-structured documents built from them.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, engine, or transliteration calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: specifications and traces are consumed, not mutated
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    args::{Dhatu, Krdanta, Pratipadika, Specification, Subanta, Taddhitanta, Tinanta},
    babylon::{Definition, Headwords, render_babylon},
    document::{Document, HeadingLevel, Section, relevel},
    entry::{DhatuEntry, EntryKind, LexicalEntry, PratipadikaEntry, SubantaEntry, TinantaEntry},
    prakriya::{Prakriya, Step},
    sutra::{Sutra, SutraTable},
    trace::{TraceBlock, TraceBlocks},
};

pub use error::DomainError;

pub use value_objects::{
    DhatuPada, Gana, Krt, Lakara, Linga, Prayoga, Purusha, Sanadi, Taddhita, Vacana, Vibhakti,
};
