//! Rule texts keyed by `(source, code)`.

use std::collections::HashMap;

/// One rule from a treatise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sutra {
    pub source: String,
    pub code: String,
    pub text: String,
}

/// Rule texts, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SutraTable {
    by_source: HashMap<String, HashMap<String, String>>,
}

impl SutraTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule; a repeated key keeps the newest text.
    pub fn insert(&mut self, sutra: Sutra) {
        self.by_source
            .entry(sutra.source)
            .or_default()
            .insert(sutra.code, sutra.text);
    }

    pub fn get(&self, source: &str, code: &str) -> Option<&str> {
        self.by_source
            .get(source)
            .and_then(|codes| codes.get(code))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_source.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fold `other` into this table; its texts win on repeated keys.
    pub fn merge(&mut self, other: SutraTable) {
        for (source, codes) in other.by_source {
            self.by_source.entry(source).or_default().extend(codes);
        }
    }
}

impl FromIterator<Sutra> for SutraTable {
    fn from_iter<I: IntoIterator<Item = Sutra>>(iter: I) -> Self {
        let mut table = Self::new();
        for sutra in iter {
            table.insert(sutra);
        }
        table
    }
}

impl Extend<Sutra> for SutraTable {
    fn extend<I: IntoIterator<Item = Sutra>>(&mut self, iter: I) {
        for sutra in iter {
            self.insert(sutra);
        }
    }
}
