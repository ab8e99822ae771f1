//! Derivation arguments: roots, stems, and the specifications built from them.
//!
//! All text fields hold the engine's internal SLP1 encoding. A
//! [`Specification`] is built fresh for every enumeration leaf and consumed
//! by exactly one derive call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{
    DomainError,
    value_objects::{
        DhatuPada, Gana, Krt, Lakara, Linga, Prayoga, Purusha, Sanadi, Taddhita, Vacana, Vibhakti,
    },
};

// ── Dhatu ────────────────────────────────────────────────────────────────────

/// A verbal root, possibly extended with sanādi suffixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Dhatu {
    /// A root from the dhatupatha, in its aupadeśika form.
    Mula {
        aupadeshika: String,
        gana: Gana,
        /// Sub-class within the gaṇa, by its SLP1 name (`kuwAdi`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        antargana: Option<String>,
        /// Upasargas the root always carries (`aDi` for `i\N`).
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        prefixes: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        sanadi: Vec<Sanadi>,
    },
    /// A denominative root built on a nominal stem.
    Nama {
        pratipadika: Box<Pratipadika>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        sanadi: Vec<Sanadi>,
    },
}

impl Dhatu {
    pub fn mula(aupadeshika: impl Into<String>, gana: Gana) -> Self {
        Self::Mula {
            aupadeshika: aupadeshika.into(),
            gana,
            antargana: None,
            prefixes: Vec::new(),
            sanadi: Vec::new(),
        }
    }

    /// Set the antargaṇa of a mūla root; a nāma root is returned unchanged.
    pub fn with_antargana(mut self, name: impl Into<String>) -> Self {
        if let Self::Mula { antargana, .. } = &mut self {
            *antargana = Some(name.into());
        }
        self
    }

    /// Set the fixed upasargas of a mūla root; a nāma root is returned
    /// unchanged.
    pub fn with_prefixes<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        if let Self::Mula { prefixes, .. } = &mut self {
            *prefixes = values.into_iter().map(Into::into).collect();
        }
        self
    }

    pub fn nama(pratipadika: Pratipadika, sanadi: Option<Sanadi>) -> Self {
        Self::Nama {
            pratipadika: Box::new(pratipadika),
            sanadi: sanadi.into_iter().collect(),
        }
    }

    /// Return a copy of this root with `extra` appended to its sanādi list.
    pub fn with_sanadi(&self, extra: &[Sanadi]) -> Self {
        let mut out = self.clone();
        match &mut out {
            Self::Mula { sanadi, .. } | Self::Nama { sanadi, .. } => {
                sanadi.extend_from_slice(extra)
            }
        }
        out
    }

    pub fn sanadi(&self) -> &[Sanadi] {
        match self {
            Self::Mula { sanadi, .. } | Self::Nama { sanadi, .. } => sanadi,
        }
    }

    pub fn aupadeshika(&self) -> Option<&str> {
        match self {
            Self::Mula { aupadeshika, .. } => Some(aupadeshika),
            Self::Nama { .. } => None,
        }
    }

    pub fn gana(&self) -> Option<Gana> {
        match self {
            Self::Mula { gana, .. } => Some(*gana),
            Self::Nama { .. } => None,
        }
    }

    pub fn antargana(&self) -> Option<&str> {
        match self {
            Self::Mula { antargana, .. } => antargana.as_deref(),
            Self::Nama { .. } => None,
        }
    }

    pub fn prefixes(&self) -> &[String] {
        match self {
            Self::Mula { prefixes, .. } => prefixes,
            Self::Nama { .. } => &[],
        }
    }

    /// SLP1 label used for titles: the aupadeśika (or stem) followed by any
    /// sanādi suffixes, joined with `+`.
    pub fn label(&self) -> String {
        let base = match self {
            Self::Mula { aupadeshika, .. } => aupadeshika.clone(),
            Self::Nama { pratipadika, .. } => pratipadika.label(),
        };
        std::iter::once(base)
            .chain(self.sanadi().iter().map(|s| s.as_str().to_string()))
            .collect::<Vec<_>>()
            .join("+")
    }
}

// ── Pratipadika ──────────────────────────────────────────────────────────────

/// A nominal stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pratipadika {
    Basic { text: String },
    /// A stem already ending in a feminine ṅī / āp suffix (e.g. `nadI`).
    Nyap { text: String },
    Krdanta { dhatu: Box<Dhatu>, krt: Krt },
}

impl Pratipadika {
    pub fn basic(text: impl Into<String>) -> Self {
        Self::Basic { text: text.into() }
    }

    pub fn nyap(text: impl Into<String>) -> Self {
        Self::Nyap { text: text.into() }
    }

    pub fn krdanta(dhatu: Dhatu, krt: Krt) -> Self {
        Self::Krdanta {
            dhatu: Box::new(dhatu),
            krt,
        }
    }

    /// SLP1 label used for titles.
    pub fn label(&self) -> String {
        match self {
            Self::Basic { text } | Self::Nyap { text } => text.clone(),
            Self::Krdanta { dhatu, krt } => format!("{}+{}", dhatu.label(), krt.as_str()),
        }
    }
}

// ── Specifications ───────────────────────────────────────────────────────────

/// A finite verb form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tinanta {
    pub dhatu: Dhatu,
    pub prayoga: Prayoga,
    pub lakara: Lakara,
    pub purusha: Purusha,
    pub vacana: Vacana,
    /// `None` lets the engine pick whichever padas the root allows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pada: Option<DhatuPada>,
}

/// An inflected nominal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subanta {
    pub pratipadika: Pratipadika,
    pub linga: Linga,
    pub vibhakti: Vibhakti,
    pub vacana: Vacana,
}

/// A stem derived from a root with a kṛt suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Krdanta {
    pub dhatu: Dhatu,
    pub krt: Krt,
}

/// A stem derived from another stem with a taddhita suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Taddhitanta {
    pub pratipadika: Pratipadika,
    pub taddhita: Taddhita,
}

/// What to derive. One value per engine call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Specification {
    Tinanta(Tinanta),
    Subanta(Subanta),
    Krdanta(Krdanta),
    Taddhitanta(Taddhitanta),
    /// The root itself (with its sanādi suffixes applied).
    Dhatu { dhatu: Dhatu },
}

impl Specification {
    /// Reject specifications the engine cannot act on.
    pub fn validate(&self) -> Result<(), DomainError> {
        let dhatu = match self {
            Self::Tinanta(t) => Some(&t.dhatu),
            Self::Krdanta(k) => Some(&k.dhatu),
            Self::Dhatu { dhatu } => Some(dhatu),
            Self::Subanta(s) => stem_root(&s.pratipadika)?,
            Self::Taddhitanta(t) => stem_root(&t.pratipadika)?,
        };
        if let Some(Dhatu::Mula { aupadeshika, .. }) = dhatu {
            if aupadeshika.is_empty() {
                return Err(DomainError::Empty { what: "aupadeshika" });
            }
        }
        Ok(())
    }
}

/// The root under a kṛdanta stem; an error for an empty basic stem.
fn stem_root(pratipadika: &Pratipadika) -> Result<Option<&Dhatu>, DomainError> {
    match pratipadika {
        Pratipadika::Basic { text } | Pratipadika::Nyap { text } if text.is_empty() => {
            Err(DomainError::Empty { what: "pratipadika" })
        }
        Pratipadika::Krdanta { dhatu, .. } => Ok(Some(dhatu.as_ref())),
        _ => Ok(None),
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tinanta(t) => {
                write!(
                    f,
                    "tinanta({} {} {} {} {}",
                    t.dhatu.label(),
                    t.prayoga,
                    t.lakara,
                    t.purusha,
                    t.vacana
                )?;
                if let Some(pada) = t.pada {
                    write!(f, " {pada}")?;
                }
                f.write_str(")")
            }
            Self::Subanta(s) => write!(
                f,
                "subanta({} {} {} {})",
                s.pratipadika.label(),
                s.linga,
                s.vibhakti,
                s.vacana
            ),
            Self::Krdanta(k) => write!(f, "krdanta({} {})", k.dhatu.label(), k.krt),
            Self::Taddhitanta(t) => {
                write!(f, "taddhitanta({} {})", t.pratipadika.label(), t.taddhita)
            }
            Self::Dhatu { dhatu } => write!(f, "dhatu({})", dhatu.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dhatu_label_includes_sanadi() {
        let bhu = Dhatu::mula("BU", Gana::Bhvadi);
        assert_eq!(bhu.label(), "BU");
        let bobhuya = bhu.with_sanadi(&[Sanadi::Yan]);
        assert_eq!(bobhuya.label(), "BU+yaN");
        // The original is untouched.
        assert!(bhu.sanadi().is_empty());
    }

    #[test]
    fn mula_metadata_survives_json_and_skips_nama() {
        let adhi_i = Dhatu::mula("i\\N", Gana::Adadi)
            .with_prefixes(["aDi"])
            .with_antargana("kuwAdi");
        assert_eq!(adhi_i.prefixes(), ["aDi"]);
        assert_eq!(adhi_i.antargana(), Some("kuwAdi"));
        let json = serde_json::to_string(&adhi_i).unwrap();
        assert_eq!(serde_json::from_str::<Dhatu>(&json).unwrap(), adhi_i);

        let plain = serde_json::to_value(Dhatu::mula("BU", Gana::Bhvadi)).unwrap();
        assert!(plain.get("prefixes").is_none());

        let nama =
            Dhatu::nama(Pratipadika::basic("putra"), Some(Sanadi::Nic)).with_prefixes(["pra"]);
        assert!(nama.prefixes().is_empty());
    }

    #[test]
    fn nama_dhatu_label_uses_stem() {
        let spastaya = Dhatu::nama(Pratipadika::basic("spazwa"), Some(Sanadi::Nic));
        assert_eq!(spastaya.label(), "spazwa+Ric");
        assert_eq!(spastaya.aupadeshika(), None);
        let kta = Pratipadika::krdanta(spastaya, Krt::kta);
        assert_eq!(kta.label(), "spazwa+Ric+kta");
    }

    #[test]
    fn specification_round_trips_through_json() {
        let spec = Specification::Tinanta(Tinanta {
            dhatu: Dhatu::mula("cura~", Gana::Curadi),
            prayoga: Prayoga::Kartari,
            lakara: Lakara::Lat,
            purusha: Purusha::Prathama,
            vacana: Vacana::Eka,
            pada: Some(DhatuPada::Parasmaipada),
        });
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"kind\":\"tinanta\""));
        let back: Specification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn validate_rejects_empty_stems() {
        let spec = Specification::Subanta(Subanta {
            pratipadika: Pratipadika::basic(""),
            linga: Linga::Pum,
            vibhakti: Vibhakti::Prathama,
            vacana: Vacana::Eka,
        });
        assert!(spec.validate().is_err());

        let ok = Specification::Dhatu {
            dhatu: Dhatu::mula("BU", Gana::Bhvadi),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn display_names_every_category() {
        let spec = Specification::Krdanta(Krdanta {
            dhatu: Dhatu::mula("BU", Gana::Bhvadi),
            krt: Krt::kvip,
        });
        assert_eq!(spec.to_string(), "krdanta(BU kvi~p)");

        let spec = Specification::Taddhitanta(Taddhitanta {
            pratipadika: Pratipadika::basic("upagu"),
            taddhita: Taddhita::aR,
        });
        assert_eq!(spec.to_string(), "taddhitanta(upagu aR)");
    }

    #[test]
    fn validate_rejects_empty_taddhita_base() {
        let spec = Specification::Taddhitanta(Taddhitanta {
            pratipadika: Pratipadika::basic(""),
            taddhita: Taddhita::matup,
        });
        assert_eq!(
            spec.validate(),
            Err(DomainError::Empty { what: "pratipadika" })
        );
    }
}
