//! Derivation engine adapters.
//!
//! The engine itself is external. These adapters replay derivations that
//! were recorded from it.

mod memory;
mod snapshot;

pub use memory::InMemoryDeriver;
pub use snapshot::{SnapshotDeriver, SnapshotRecord};
