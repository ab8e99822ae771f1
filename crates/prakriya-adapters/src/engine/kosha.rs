//! The vidyut word list behind the [`Lexicon`] port.
//!
//! A kosha directory is the output of `vidyut_kosha::Builder`. It carries no
//! glosses, so root meanings come from an optional dhātupāṭha TSV
//! (`code<TAB>dhatu<TAB>artha`, one header row).

use std::{collections::HashMap, path::Path};

use tracing::{debug, instrument, trace};
use vidyut_kosha::{
    Kosha,
    entries::{self as kosha, PadaEntry},
};
use vidyut_prakriya::{Dhatupatha, args as vp};

use prakriya_core::{
    application::{ApplicationError, ports::Lexicon},
    domain::{
        Dhatu, DhatuEntry, Gana, LexicalEntry, PratipadikaEntry, SubantaEntry, TinantaEntry,
    },
    error::{PrakriyaError, PrakriyaResult},
};

use super::args::{
    from_basic, from_dhatu, from_lakara, from_linga, from_pratipadika, from_prayoga, from_purusha,
    from_vacana, from_vibhakti,
};

/// Root meanings keyed by upadeśa and gaṇa.
type Arthas = HashMap<(String, Gana), String>;

/// Read-only lexicon over a vidyut kosha.
pub struct KoshaLexicon {
    kosha: Kosha,
    arthas: Arthas,
}

impl KoshaLexicon {
    /// Open the kosha in `dir`, with glosses from `dhatupatha` when given.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn open(dir: &Path, dhatupatha: Option<&Path>) -> PrakriyaResult<Self> {
        let kosha = Kosha::new(dir).map_err(|e| load_error("kosha", dir, e.to_string()))?;
        let arthas = match dhatupatha {
            Some(path) => load_arthas(path)?,
            None => Arthas::new(),
        };
        debug!(arthas = arthas.len(), "Opened kosha");
        Ok(Self { kosha, arthas })
    }

    fn dhatu_entry(&self, entry: &kosha::DhatuEntry) -> Option<DhatuEntry> {
        let dhatu = from_dhatu(entry.dhatu())?;
        let artha = match (dhatu.aupadeshika(), dhatu.gana()) {
            (Some(upadesha), Some(gana)) => self
                .arthas
                .get(&(upadesha.to_string(), gana))
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        };
        let antargana = dhatu.antargana().map(str::to_string);
        Some(DhatuEntry {
            dhatu,
            artha,
            antargana,
        })
    }

    fn lexical_entry(&self, pada: &PadaEntry) -> Option<LexicalEntry> {
        match pada {
            PadaEntry::Tinanta(t) => Some(LexicalEntry::Tinanta(TinantaEntry {
                dhatu_entry: self.dhatu_entry(t.dhatu_entry())?,
                prayoga: from_prayoga(t.prayoga()),
                lakara: from_lakara(t.lakara()),
                purusha: from_purusha(t.purusha()),
                vacana: from_vacana(t.vacana()),
                pada: None,
            })),
            PadaEntry::Subanta(s) => Some(LexicalEntry::Subanta(SubantaEntry {
                pratipadika_entry: pratipadika_entry(s.pratipadika_entry())?,
                linga: from_linga(s.linga()),
                vibhakti: from_vibhakti(s.vibhakti()),
                vacana: from_vacana(s.vacana()),
            })),
            PadaEntry::Avyaya(_) | PadaEntry::Unknown => None,
        }
    }
}

impl Lexicon for KoshaLexicon {
    fn get(&self, key: &str) -> PrakriyaResult<Vec<LexicalEntry>> {
        let padas = self.kosha.get_all(key);
        let entries: Vec<_> = padas.iter().filter_map(|p| self.lexical_entry(p)).collect();
        trace!(key, found = padas.len(), kept = entries.len(), "Kosha lookup");
        Ok(entries)
    }

    fn dhatus(&self) -> PrakriyaResult<Vec<DhatuEntry>> {
        Ok(self
            .kosha
            .dhatus()
            .filter_map(|d| self.dhatu_entry(&d))
            .collect())
    }

    fn pratipadikas(&self) -> PrakriyaResult<Vec<PratipadikaEntry>> {
        Ok(self
            .kosha
            .pratipadikas()
            .filter_map(|p| pratipadika_entry(&p))
            .collect())
    }
}

fn pratipadika_entry(entry: &kosha::PratipadikaEntry) -> Option<PratipadikaEntry> {
    match entry {
        kosha::PratipadikaEntry::Basic(b) => Some(PratipadikaEntry {
            pratipadika: from_basic(b.pratipadika()),
            lingas: b.lingas().iter().copied().map(from_linga).collect(),
        }),
        kosha::PratipadikaEntry::Krdanta(_) => {
            let stem: vp::Pratipadika = entry.into();
            Some(PratipadikaEntry {
                pratipadika: from_pratipadika(&stem)?,
                lingas: Vec::new(),
            })
        }
    }
}

fn load_arthas(path: &Path) -> PrakriyaResult<Arthas> {
    let dhatupatha =
        Dhatupatha::from_path(path).map_err(|e| load_error("dhatupatha", path, e.to_string()))?;
    Ok(dhatupatha
        .iter()
        .filter_map(|entry| {
            let dhatu: Dhatu = from_dhatu(entry.dhatu())?;
            let key = (dhatu.aupadeshika()?.to_string(), dhatu.gana()?);
            Some((key, entry.artha().to_string()))
        })
        .collect())
}

fn load_error(what: &'static str, path: &Path, reason: String) -> PrakriyaError {
    ApplicationError::DataLoad {
        what,
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prakriya_core::domain::{Lakara, Linga, Pratipadika};
    use std::fs;
    use tempfile::TempDir;
    use vidyut_kosha::Builder;

    fn safe(s: &str) -> vp::Slp1String {
        vp::Slp1String::from(s).unwrap()
    }

    /// A kosha with `Bavati` and the stem `nadI`, plus a two-root dhātupāṭha.
    fn fixture() -> (TempDir, KoshaLexicon) {
        let dir = TempDir::new().unwrap();
        let kosha_dir = dir.path().join("kosha");

        let bhu = vp::Dhatu::mula(safe("BU"), vp::Gana::Bhvadi);
        let bhavati = vp::Tinanta::new(
            bhu.clone(),
            vp::Prayoga::Kartari,
            vp::Lakara::Lat,
            vp::Purusha::Prathama,
            vp::Vacana::Eka,
        );
        let nadi = vp::Pratipadika::nyap(safe("nadI"));
        let vp::Pratipadika::Basic(nadi) = &nadi else {
            unreachable!()
        };
        let lingas = [vp::Linga::Stri];

        let mut builder = Builder::new(&kosha_dir).unwrap();
        builder.register_dhatu_entry(&kosha::DhatuEntry::new(&bhu, "BU"));
        builder.register_pratipadika_entry(&kosha::PratipadikaEntry::basic(nadi, &lingas));
        builder
            .insert("Bavati", &PadaEntry::Tinanta((&bhavati).into()))
            .unwrap();
        builder.finish().unwrap();

        let tsv = dir.path().join("dhatupatha.tsv");
        fs::write(
            &tsv,
            "code\tdhatu\tartha\n01.0001\tBU\tsattAyAm\n10.0001\tcura~\tsteye\n",
        )
        .unwrap();

        let lexicon = KoshaLexicon::open(&kosha_dir, Some(&tsv)).unwrap();
        (dir, lexicon)
    }

    #[test]
    fn finite_forms_carry_their_root_gloss() {
        let (_dir, lexicon) = fixture();

        let entries = lexicon.get("Bavati").unwrap();
        assert_eq!(entries.len(), 1);
        let LexicalEntry::Tinanta(t) = &entries[0] else {
            panic!("expected a tinanta, got {:?}", entries[0]);
        };
        assert_eq!(t.dhatu_entry.dhatu, Dhatu::mula("BU", Gana::Bhvadi));
        assert_eq!(t.dhatu_entry.artha, "sattAyAm");
        assert_eq!(t.lakara, Lakara::Lat);
        assert_eq!(t.pada, None);

        assert!(lexicon.get("Bavatu").unwrap().is_empty());
    }

    #[test]
    fn lists_roots_and_stems() {
        let (_dir, lexicon) = fixture();

        let dhatus = lexicon.dhatus().unwrap();
        assert_eq!(dhatus.len(), 1);
        assert_eq!(dhatus[0].artha, "sattAyAm");

        let stems = lexicon.pratipadikas().unwrap();
        assert_eq!(stems.len(), 1);
        assert_eq!(stems[0].pratipadika, Pratipadika::nyap("nadI"));
        assert_eq!(stems[0].lingas, [Linga::Stri]);
    }

    #[test]
    fn glosses_are_optional() {
        let (dir, _) = fixture();
        let lexicon = KoshaLexicon::open(&dir.path().join("kosha"), None).unwrap();
        assert_eq!(lexicon.dhatus().unwrap()[0].artha, "");
    }

    #[test]
    fn missing_data_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        let err = KoshaLexicon::open(&dir.path().join("nowhere"), None)
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to load kosha"));

        let (fixture_dir, _) = fixture();
        let err = KoshaLexicon::open(
            &fixture_dir.path().join("kosha"),
            Some(&dir.path().join("missing.tsv")),
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("Failed to load dhatupatha"));
    }
}
