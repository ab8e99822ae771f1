//! Application services - orchestrate use cases.
//!
//! Every service borrows the [`Workbench`](crate::application::Workbench)
//! and is cheap to construct per call site.

pub mod dictionary;
pub mod emitter;
pub mod enumerator;
pub mod formatter;
pub mod lookup;

pub use dictionary::{DictionaryService, SanadiTable, StemShard};
pub use emitter::DocumentEmitter;
pub use enumerator::{Enumerator, NominalAxes, SubantaMode, VerbalOptions};
pub use formatter::{ASHTADHYAYI, TraceFormatter, normalize_source, sutra_link};
pub use lookup::LookupService;
