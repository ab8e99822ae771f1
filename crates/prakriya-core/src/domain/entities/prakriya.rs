//! Derivation results as returned by the engine.

use serde::{Deserialize, Serialize};

/// One rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Treatise tag as the engine reports it (e.g. `Ashtadhyayi`).
    pub source: String,
    /// Rule code within the treatise (e.g. `1.3.1`).
    pub code: String,
    /// Terms after the rule applied, SLP1.
    pub result: Vec<String>,
}

impl Step {
    pub fn new(
        source: impl Into<String>,
        code: impl Into<String>,
        result: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            source: source.into(),
            code: code.into(),
            result: result.into_iter().map(Into::into).collect(),
        }
    }
}

/// A finished derivation: the final form and the ordered rule trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prakriya {
    pub text: String,
    #[serde(default)]
    pub history: Vec<Step>,
}

impl Prakriya {
    pub fn new(text: impl Into<String>, history: Vec<Step>) -> Self {
        Self {
            text: text.into(),
            history,
        }
    }
}
