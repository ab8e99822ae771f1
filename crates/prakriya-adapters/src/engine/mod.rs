//! Adapters over the vidyut Sanskrit toolkit: the derivation engine and the
//! kosha word list.

mod args;
mod deriver;
mod kosha;

pub use deriver::VidyutDeriver;
pub use kosha::KoshaLexicon;
