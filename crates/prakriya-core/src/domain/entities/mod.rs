// Entities - Domain objects with behavior
pub mod args;
pub mod babylon;
pub mod document;
pub mod entry;
pub mod prakriya;
pub mod sutra;
pub mod trace;
