//! Trace formatting: one prakriyā → one [`TraceBlock`].
//!
//! Each step becomes
//!
//! ```text
//! {source} {code} → {result} ({sutra} {link})
//! ```
//!
//! where `link` is a reference into the online Aṣṭādhyāyī and is present only
//! for steps whose source is the Aṣṭādhyāyī.

use crate::{
    application::Workbench,
    domain::{Prakriya, Step, TraceBlock, TraceBlocks},
};

/// Display name of the Aṣṭādhyāyī, the only source that gets a link.
pub const ASHTADHYAYI: &str = "अष्टाध्यायी";

/// What the engine's `Ashtadhyayi` tag becomes when read as SLP1.
const ASHTADHYAYI_MANGLED: &str = "आस्ह्तद्ह्ययि";

/// Placeholder for rules missing from the sūtra table.
const UNKNOWN_SUTRA: &str = "(??)";

const SUTRA_URL_BASE: &str = "https://ashtadhyayi.github.io/suutra";

/// Canonicalize a transliterated source name. Idempotent.
pub fn normalize_source(display_source: &str) -> String {
    display_source.replace(ASHTADHYAYI_MANGLED, ASHTADHYAYI)
}

/// Markdown link to a rule's page, keyed by its adhyāya.pāda prefix.
pub fn sutra_link(code: &str) -> String {
    let prefix: String = code.chars().take(3).collect();
    format!("[A]({SUTRA_URL_BASE}/{prefix}/{code})")
}

pub struct TraceFormatter<'a> {
    wb: &'a Workbench,
}

impl<'a> TraceFormatter<'a> {
    pub fn new(wb: &'a Workbench) -> Self {
        Self { wb }
    }

    /// Format every prakriyā, keyed by displayed final form (last wins).
    pub fn format(&self, prakriyas: &[Prakriya]) -> TraceBlocks {
        prakriyas.iter().map(|p| self.format_one(p)).collect()
    }

    pub fn format_one(&self, prakriya: &Prakriya) -> TraceBlock {
        let heading = self.wb.display(&prakriya.text);
        let lines = prakriya
            .history
            .iter()
            .map(|step| self.format_step(step))
            .collect();
        TraceBlock::new(heading, lines)
    }

    fn format_step(&self, step: &Step) -> String {
        let source = normalize_source(&self.wb.display(&step.source));
        let sutra = self
            .wb
            .sutras()
            .get(&step.source, &step.code)
            .map(|text| self.wb.display(text))
            .unwrap_or_else(|| UNKNOWN_SUTRA.to_string());
        let link = if source == ASHTADHYAYI {
            sutra_link(&step.code)
        } else {
            String::new()
        };
        let result = self.wb.display(&step.result.join(","));
        format!("{source} {code} → {result} ({sutra} {link})", code = step.code)
    }
}
