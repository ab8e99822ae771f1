//! Lexicon adapters.

mod json;
mod memory;

pub use json::{JsonLexicon, LexiconFile};
pub use memory::InMemoryLexicon;
