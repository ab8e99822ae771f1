//! Filesystem-safe names from display titles.
//!
//! A Devanagari title is respelled in ITRANS (a readable ASCII scheme) by
//! `vidyut_lipi`, then reduced to `[A-Za-z0-9_~-]` with whitespace folded to
//! `_`. Names are never truncated, so distinct titles keep distinct names.

use vidyut_lipi::{Mapping, Scheme, transliterate};

use prakriya_core::application::ports::NameSanitizer;

const FALLBACK: &str = "untitled";

/// Candrabindu and the two accent marks. They tag markers and pitch, not
/// sounds, and ITRANS would spell them with punctuation.
const SILENT: [char; 3] = ['\u{0901}', '\u{0951}', '\u{0952}'];

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '~')
}

/// The production [`NameSanitizer`].
#[derive(Debug, Clone)]
pub struct ItransStorageName {
    mapping: Mapping,
}

impl ItransStorageName {
    pub fn new() -> Self {
        Self {
            mapping: Mapping::new(Scheme::Devanagari, Scheme::Itrans),
        }
    }
}

impl Default for ItransStorageName {
    fn default() -> Self {
        Self::new()
    }
}

impl NameSanitizer for ItransStorageName {
    fn storage_name(&self, title: &str) -> String {
        let voiced: String = title.trim().chars().filter(|c| !SILENT.contains(c)).collect();
        let name: String = transliterate(voiced, &self.mapping)
            .chars()
            .filter_map(|c| {
                if c.is_whitespace() {
                    Some('_')
                } else {
                    is_safe(c).then_some(c)
                }
            })
            .collect();

        if name.is_empty() {
            FALLBACK.to_string()
        } else {
            name
        }
    }
}
