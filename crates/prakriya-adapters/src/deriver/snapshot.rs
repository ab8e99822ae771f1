//! Replays recorded derivations from a JSON snapshot.
//!
//! # File format
//!
//! A list of records, each pairing one specification with everything the
//! engine returned for it:
//!
//! ```json
//! [
//!   { "spec": { "kind": "tinanta",
//!               "dhatu": { "type": "mula", "aupadeshika": "BU", "gana": "Bhvadi" },
//!               "prayoga": "Kartari", "lakara": "Lat", "purusha": "Prathama", "vacana": "Eka" },
//!     "prakriyas": [ { "text": "Bavati",
//!                      "history": [ { "source": "Ashtadhyayi", "code": "1.3.1", "result": ["BU"] } ] } ] }
//! ]
//! ```
//!
//! A specification with no record derives nothing. A repeated specification
//! keeps its last record.

use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use prakriya_core::{
    application::{ApplicationError, ports::Deriver},
    domain::{Prakriya, Specification},
    error::{PrakriyaError, PrakriyaResult},
};

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub spec: Specification,
    #[serde(default)]
    pub prakriyas: Vec<Prakriya>,
}

#[derive(Debug, Clone, Default)]
pub struct SnapshotDeriver {
    records: HashMap<Specification, Vec<Prakriya>>,
}

impl SnapshotDeriver {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> PrakriyaResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| load_error(path, e.to_string()))?;
        let records: Vec<SnapshotRecord> =
            serde_json::from_str(&raw).map_err(|e| load_error(path, e.to_string()))?;
        let deriver: Self = records.into_iter().collect();
        debug!(records = deriver.records.len(), "Loaded derivation snapshot");
        Ok(deriver)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<SnapshotRecord> for SnapshotDeriver {
    fn from_iter<I: IntoIterator<Item = SnapshotRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|r| (r.spec, r.prakriyas)).collect(),
        }
    }
}

impl Deriver for SnapshotDeriver {
    fn derive(&self, spec: &Specification) -> PrakriyaResult<Vec<Prakriya>> {
        let prakriyas = self.records.get(spec).cloned().unwrap_or_default();
        trace!(%spec, results = prakriyas.len(), "Snapshot lookup");
        Ok(prakriyas)
    }
}

fn load_error(path: &Path, reason: String) -> PrakriyaError {
    ApplicationError::DataLoad {
        what: "derivation snapshot",
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prakriya_core::domain::{
        Dhatu, Gana, Krdanta, Krt, Lakara, Prayoga, Purusha, Step, Tinanta, Vacana,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn bhavati_spec() -> Specification {
        Specification::Tinanta(Tinanta {
            dhatu: Dhatu::mula("BU", Gana::Bhvadi),
            prayoga: Prayoga::Kartari,
            lakara: Lakara::Lat,
            purusha: Purusha::Prathama,
            vacana: Vacana::Eka,
            pada: None,
        })
    }

    #[test]
    fn replays_recorded_specs_only() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[ { "spec": { "kind": "tinanta",
                              "dhatu": { "type": "mula", "aupadeshika": "BU", "gana": "Bhvadi" },
                              "prayoga": "Kartari", "lakara": "Lat",
                              "purusha": "Prathama", "vacana": "Eka" },
                    "prakriyas": [ { "text": "Bavati",
                                     "history": [ { "source": "Ashtadhyayi", "code": "1.3.1",
                                                    "result": ["BU"] } ] } ] } ]"#,
        )
        .unwrap();

        let deriver = SnapshotDeriver::load(file.path()).unwrap();
        let prakriyas = deriver.derive(&bhavati_spec()).unwrap();
        assert_eq!(prakriyas.len(), 1);
        assert_eq!(prakriyas[0].text, "Bavati");
        assert_eq!(prakriyas[0].history[0].code, "1.3.1");

        let other = Specification::Krdanta(Krdanta {
            dhatu: Dhatu::mula("BU", Gana::Bhvadi),
            krt: Krt::kta,
        });
        assert!(deriver.derive(&other).unwrap().is_empty());
    }

    #[test]
    fn later_records_win() {
        let first = SnapshotRecord {
            spec: bhavati_spec(),
            prakriyas: vec![Prakriya::new("x", vec![])],
        };
        let second = SnapshotRecord {
            spec: bhavati_spec(),
            prakriyas: vec![Prakriya::new("Bavati", vec![Step::new("a", "1", ["b"])])],
        };
        let deriver: SnapshotDeriver = [first, second].into_iter().collect();
        assert_eq!(deriver.len(), 1);
        assert_eq!(deriver.derive(&bhavati_spec()).unwrap()[0].text, "Bavati");
    }

    #[test]
    fn bad_snapshot_is_a_data_load_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();
        let err = SnapshotDeriver::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("derivation snapshot"));
    }
}
