//! SLP1 ↔ Devanagari transliteration over `vidyut_lipi`.
//!
//! Both mappings are built once; each call is a single pass over the input.
//! Characters outside either scheme are copied through.

use vidyut_lipi::{Mapping, Scheme, transliterate};

use prakriya_core::application::ports::Transliterator;

/// The production transliterator.
#[derive(Debug, Clone)]
pub struct Slp1Devanagari {
    to_display: Mapping,
    to_internal: Mapping,
}

impl Slp1Devanagari {
    pub fn new() -> Self {
        Self {
            to_display: Mapping::new(Scheme::Slp1, Scheme::Devanagari),
            to_internal: Mapping::new(Scheme::Devanagari, Scheme::Slp1),
        }
    }
}

impl Default for Slp1Devanagari {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator for Slp1Devanagari {
    fn to_display(&self, internal: &str) -> String {
        transliterate(internal, &self.to_display)
    }

    fn to_internal(&self, display: &str) -> String {
        transliterate(display, &self.to_internal)
    }
}
