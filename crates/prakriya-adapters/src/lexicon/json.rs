//! JSON-file lexicon.
//!
//! # File format
//!
//! ```json
//! {
//!   "entries": {
//!     "corayati": [
//!       { "kind": "tinanta",
//!         "dhatu_entry": { "dhatu": { "type": "mula", "aupadeshika": "cura~", "gana": "Curadi" },
//!                          "artha": "steye" },
//!         "prayoga": "Kartari", "lakara": "Lat", "purusha": "Prathama", "vacana": "Eka" }
//!     ]
//!   },
//!   "dhatus": [ { "dhatu": { "type": "mula", "aupadeshika": "BU", "gana": "Bhvadi" }, "artha": "sattAyAm" } ],
//!   "pratipadikas": [ { "pratipadika": { "type": "nyap", "text": "nadI" }, "lingas": ["Stri"] } ]
//! }
//! ```
//!
//! Keys of `entries` are SLP1 surface forms. All three sections are optional.

use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use prakriya_core::{
    application::{ApplicationError, ports::Lexicon},
    domain::{DhatuEntry, LexicalEntry, PratipadikaEntry},
    error::PrakriyaResult,
};

/// On-disk shape of a lexicon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub entries: HashMap<String, Vec<LexicalEntry>>,
    #[serde(default)]
    pub dhatus: Vec<DhatuEntry>,
    #[serde(default)]
    pub pratipadikas: Vec<PratipadikaEntry>,
}

/// Read-only lexicon loaded fully into memory from one JSON file.
#[derive(Debug, Clone, Default)]
pub struct JsonLexicon {
    data: LexiconFile,
}

impl JsonLexicon {
    /// Load from `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> PrakriyaResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| load_error(path, e.to_string()))?;
        let data: LexiconFile =
            serde_json::from_str(&raw).map_err(|e| load_error(path, e.to_string()))?;
        debug!(
            forms = data.entries.len(),
            dhatus = data.dhatus.len(),
            pratipadikas = data.pratipadikas.len(),
            "Loaded lexicon"
        );
        Ok(Self { data })
    }

    pub fn from_data(data: LexiconFile) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.entries.is_empty()
    }
}

impl Lexicon for JsonLexicon {
    fn get(&self, key: &str) -> PrakriyaResult<Vec<LexicalEntry>> {
        Ok(self.data.entries.get(key).cloned().unwrap_or_default())
    }

    fn dhatus(&self) -> PrakriyaResult<Vec<DhatuEntry>> {
        Ok(self.data.dhatus.clone())
    }

    fn pratipadikas(&self) -> PrakriyaResult<Vec<PratipadikaEntry>> {
        Ok(self.data.pratipadikas.clone())
    }
}

fn load_error(path: &Path, reason: String) -> prakriya_core::error::PrakriyaError {
    ApplicationError::DataLoad {
        what: "lexicon",
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prakriya_core::domain::{EntryKind, Linga};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LEXICON: &str = r#"{
      "entries": {
        "corayati": [
          { "kind": "tinanta",
            "dhatu_entry": { "dhatu": { "type": "mula", "aupadeshika": "cura~", "gana": "Curadi" },
                             "artha": "steye" },
            "prayoga": "Kartari", "lakara": "Lat", "purusha": "Prathama", "vacana": "Eka" }
        ]
      },
      "pratipadikas": [ { "pratipadika": { "type": "nyap", "text": "nadI" }, "lingas": ["Stri"] } ]
    }"#;

    fn write(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_entries_and_stems() {
        let file = write(LEXICON);
        let lexicon = JsonLexicon::load(file.path()).unwrap();

        let entries = lexicon.get("corayati").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind(), EntryKind::Tinanta);
        assert_eq!(entries[0].dhatu().and_then(|d| d.aupadeshika()), Some("cura~"));

        assert!(lexicon.dhatus().unwrap().is_empty());
        let stems = lexicon.pratipadikas().unwrap();
        assert_eq!(stems[0].lingas, [Linga::Stri]);
    }

    #[test]
    fn unknown_key_is_empty_not_an_error() {
        let lexicon = JsonLexicon::load(write(LEXICON).path()).unwrap();
        assert!(lexicon.get("qqq").unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_a_data_load_error() {
        let err = JsonLexicon::load(write("{ not json").path()).unwrap_err();
        assert!(err.to_string().contains("Failed to load lexicon"));

        let err = JsonLexicon::load(Path::new("/does/not/exist.json")).unwrap_err();
        assert!(!err.is_recoverable());
    }
}
