//! Babylon dictionary entries.
//!
//! A Babylon source file is a sequence of entries, each a `|`-separated
//! headword line followed by the meaning and a blank line.

/// Headwords in first-insertion order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headwords(Vec<String>);

impl Headwords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the headword was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if word.is_empty() || self.0.contains(&word) {
            return false;
        }
        self.0.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> Extend<S> for Headwords {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Headwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut words = Self::new();
        words.extend(iter);
        words
    }
}

/// One dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub headwords: Headwords,
    pub meaning: String,
}

impl Definition {
    pub fn new(headwords: Headwords, meaning: impl Into<String>) -> Self {
        Self {
            headwords,
            meaning: meaning.into(),
        }
    }

    /// Babylon text for this entry, including the trailing blank line.
    pub fn to_babylon(&self) -> String {
        let heads: Vec<&str> = self.headwords.iter().map(String::as_str).collect();
        format!("{}\n{}\n\n", heads.join("|"), self.meaning)
    }
}

/// Babylon text for a whole dictionary.
pub fn render_babylon(definitions: &[Definition]) -> String {
    definitions.iter().map(Definition::to_babylon).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headwords_dedupe_in_order() {
        let words: Headwords = ["भू", "भवति", "भू", ""].into_iter().collect();
        let listed: Vec<_> = words.iter().map(String::as_str).collect();
        assert_eq!(listed, ["भू", "भवति"]);
    }

    #[test]
    fn babylon_entry_layout() {
        let def = Definition::new(["नदी", "नद्यौ"].into_iter().collect(), "नदी स्त्री<BR>…");
        assert_eq!(def.to_babylon(), "नदी|नद्यौ\nनदी स्त्री<BR>…\n\n");
        assert_eq!(render_babylon(&[def.clone(), def]).matches("\n\n").count(), 2);
    }
}
