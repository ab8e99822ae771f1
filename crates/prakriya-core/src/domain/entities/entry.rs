//! Lexicon entries.
//!
//! Entries are owned by the lexicon and read-only here. Filtering by kind
//! uses the closed [`EntryKind`] discriminant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{
    DomainError,
    entities::args::{Dhatu, Pratipadika, Specification, Subanta, Tinanta},
    value_objects::{DhatuPada, Lakara, Linga, Prayoga, Purusha, Vacana, Vibhakti},
};

/// A root as listed in the lexicon, with its gloss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DhatuEntry {
    pub dhatu: Dhatu,
    #[serde(default)]
    pub artha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antargana: Option<String>,
}

impl DhatuEntry {
    pub fn new(dhatu: Dhatu, artha: impl Into<String>) -> Self {
        Self {
            dhatu,
            artha: artha.into(),
            antargana: None,
        }
    }
}

/// A stem as listed in the lexicon, with the genders it takes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PratipadikaEntry {
    pub pratipadika: Pratipadika,
    #[serde(default)]
    pub lingas: Vec<Linga>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TinantaEntry {
    pub dhatu_entry: DhatuEntry,
    pub prayoga: Prayoga,
    pub lakara: Lakara,
    pub purusha: Purusha,
    pub vacana: Vacana,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pada: Option<DhatuPada>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubantaEntry {
    pub pratipadika_entry: PratipadikaEntry,
    pub linga: Linga,
    pub vibhakti: Vibhakti,
    pub vacana: Vacana,
}

/// Discriminant of [`LexicalEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Tinanta,
    Subanta,
}

impl EntryKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tinanta => "tinanta",
            Self::Subanta => "subanta",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tinanta" | "tin" | "verb" => Ok(Self::Tinanta),
            "subanta" | "sup" | "noun" => Ok(Self::Subanta),
            other => Err(DomainError::UnknownCategory {
                category: "entry kind",
                value: other.to_string(),
            }),
        }
    }
}

/// A dictionary entry for one surface form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LexicalEntry {
    Tinanta(TinantaEntry),
    Subanta(SubantaEntry),
}

impl LexicalEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Tinanta(_) => EntryKind::Tinanta,
            Self::Subanta(_) => EntryKind::Subanta,
        }
    }

    /// The root behind a finite-verb entry.
    pub fn dhatu(&self) -> Option<&Dhatu> {
        match self {
            Self::Tinanta(t) => Some(&t.dhatu_entry.dhatu),
            Self::Subanta(_) => None,
        }
    }

    /// The specification that re-derives exactly this entry.
    pub fn to_specification(&self) -> Specification {
        match self {
            Self::Tinanta(t) => Specification::Tinanta(Tinanta {
                dhatu: t.dhatu_entry.dhatu.clone(),
                prayoga: t.prayoga,
                lakara: t.lakara,
                purusha: t.purusha,
                vacana: t.vacana,
                pada: t.pada,
            }),
            Self::Subanta(s) => Specification::Subanta(Subanta {
                pratipadika: s.pratipadika_entry.pratipadika.clone(),
                linga: s.linga,
                vibhakti: s.vibhakti,
                vacana: s.vacana,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gana;

    fn corayati() -> LexicalEntry {
        LexicalEntry::Tinanta(TinantaEntry {
            dhatu_entry: DhatuEntry::new(Dhatu::mula("cura~", Gana::Curadi), "steye"),
            prayoga: Prayoga::Kartari,
            lakara: Lakara::Lat,
            purusha: Purusha::Prathama,
            vacana: Vacana::Eka,
            pada: Some(DhatuPada::Parasmaipada),
        })
    }

    #[test]
    fn tinanta_entry_exposes_root_and_spec() {
        let entry = corayati();
        assert_eq!(entry.kind(), EntryKind::Tinanta);
        assert_eq!(entry.dhatu().and_then(Dhatu::aupadeshika), Some("cura~"));
        match entry.to_specification() {
            Specification::Tinanta(t) => {
                assert_eq!(t.lakara, Lakara::Lat);
                assert_eq!(t.pada, Some(DhatuPada::Parasmaipada));
            }
            other => panic!("unexpected spec {other:?}"),
        }
    }

    #[test]
    fn entry_kind_parses_aliases() {
        assert_eq!("verb".parse::<EntryKind>().unwrap(), EntryKind::Tinanta);
        assert_eq!("Subanta".parse::<EntryKind>().unwrap(), EntryKind::Subanta);
        assert!("avyaya".parse::<EntryKind>().is_err());
    }

    #[test]
    fn entry_json_is_tagged_by_kind() {
        let json = serde_json::to_value(corayati()).unwrap();
        assert_eq!(json["kind"], "tinanta");
        assert_eq!(json["dhatu_entry"]["dhatu"]["type"], "mula");
    }
}
