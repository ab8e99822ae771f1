//! Babylon form-table dictionaries.
//!
//! Four families are produced:
//!
//! - **tiṅanta**: one entry per root and lakāra, listing every finite form
//!   in both padas; one dictionary per sanādi table and prayoga.
//! - **kṛdanta**: one entry per root listing every kṛt derivative; one
//!   dictionary per sanādi table.
//! - **subanta**: one entry per stem and liṅga listing the declension;
//!   sharded by the stem's first letter.
//! - **taddhitānta**: one entry per stem listing every taddhita derivative;
//!   sharded like subanta, on a finer table.
//!
//! Every dictionary lands at `<dest>/<name>/<name>.babylon`. An existing file
//! is left alone unless `overwrite` is set.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{Workbench, ports::Progress},
    domain::{
        Definition, Dhatu, DhatuEntry, DhatuPada, Headwords, Krdanta, Krt, Lakara,
        PratipadikaEntry, Pratipadika, Prayoga, Purusha, Sanadi, Specification, Subanta, Taddhita,
        Taddhitanta, Tinanta, Vacana, Vibhakti, render_babylon,
    },
    error::PrakriyaResult,
};

const BR: &str = "<BR>";
const KARMANI_HEAD: &str = " अकर्तरि<BR><BR>";
const KARMANI_SUFFIX: &str = "-akartari";

/// Vedic accent marks.
const ACCENTS: [char; 2] = ['\u{0952}', '\u{0951}'];
const CANDRABINDU: char = '\u{0901}';

/// A named set of sanādi suffixes applied to every root of a dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanadiTable {
    pub name: &'static str,
    pub sanadi: &'static [Sanadi],
}

impl SanadiTable {
    pub const TINANTA: &'static [SanadiTable] = &[
        SanadiTable::new("vidyut-tiN", &[]),
        SanadiTable::new("vidyut-Nic-tiN", &[Sanadi::Nic]),
        SanadiTable::new("vidyut-san-tiN", &[Sanadi::San]),
        SanadiTable::new("vidyut-yaN-tiN", &[Sanadi::Yan]),
        SanadiTable::new("vidyut-yaN-luk-tiN", &[Sanadi::YanLuk]),
        SanadiTable::new("vidyut-san-Nic-tiN", &[Sanadi::San, Sanadi::Nic]),
        SanadiTable::new("vidyut-Nic-san-tiN", &[Sanadi::Nic, Sanadi::San]),
    ];

    pub const KRDANTA: &'static [SanadiTable] = &[
        SanadiTable::new("vidyut-kRdanta", &[]),
        SanadiTable::new("vidyut-Nic-kRdanta", &[Sanadi::Nic]),
        SanadiTable::new("vidyut-san-kRdanta", &[Sanadi::San]),
        SanadiTable::new("vidyut-yaN-kRdanta", &[Sanadi::Yan]),
        SanadiTable::new("vidyut-yaNluk-kRdanta", &[Sanadi::YanLuk]),
        SanadiTable::new("vidyut-san-Nic-kRdanta", &[Sanadi::San, Sanadi::Nic]),
        SanadiTable::new("vidyut-Nic-san-kRdanta", &[Sanadi::Nic, Sanadi::San]),
    ];

    pub const fn new(name: &'static str, sanadi: &'static [Sanadi]) -> Self {
        Self { name, sanadi }
    }
}

/// A half-open range `[start, end)` of display-script stems, named within
/// one dictionary family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemShard {
    pub family: &'static str,
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

impl StemShard {
    pub const SUBANTA: &'static [StemShard] = &[
        StemShard::subanta("a", "", "इ"),
        StemShard::subanta("i", "इ", "उ"),
        StemShard::subanta("uch", "उ", "क"),
        StemShard::subanta("ku", "क", "च"),
        StemShard::subanta("chu", "च", "ट"),
        StemShard::subanta("Tu", "ट", "त"),
        StemShard::subanta("tu1", "त", "प"),
        StemShard::subanta("pu", "प", "य"),
        StemShard::subanta("yrlv", "य", "श"),
        StemShard::subanta("shal", "श", "ा"),
    ];

    /// Finer than the subanta table: every stem fans out over all taddhitas.
    pub const TADDHITANTA: &'static [StemShard] = &[
        StemShard::taddhitanta("a", "", "इ"),
        StemShard::taddhitanta("i", "इ", "उ"),
        StemShard::taddhitanta("uch", "उ", "क"),
        StemShard::taddhitanta("ku", "क", "च"),
        StemShard::taddhitanta("chu", "च", "ट"),
        StemShard::taddhitanta("Tu", "ट", "त"),
        StemShard::taddhitanta("tu1", "त", "प"),
        StemShard::taddhitanta("p", "प", "ब"),
        StemShard::taddhitanta("b", "ब", "य"),
        StemShard::taddhitanta("yr", "य", "ल"),
        StemShard::taddhitanta("lv", "ल", "श"),
        StemShard::taddhitanta("sh", "श", "स"),
        StemShard::taddhitanta("s", "स", "ह"),
        StemShard::taddhitanta("hal", "ह", "ा"),
    ];

    const fn subanta(name: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            family: "vidyut-subanta",
            name,
            start,
            end,
        }
    }

    const fn taddhitanta(name: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            family: "vidyut-taddhitAnta",
            name,
            start,
            end,
        }
    }

    pub fn contains(&self, stem: &str) -> bool {
        stem >= self.start && stem < self.end
    }

    pub fn dictionary_name(&self) -> String {
        format!("{}-{}", self.family, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootDictionary {
    Tinanta,
    Krdanta,
}

/// Builds Babylon dictionaries from the lexicon and the derivation engine.
pub struct DictionaryService<'a> {
    wb: &'a Workbench,
    progress: &'a dyn Progress,
}

impl<'a> DictionaryService<'a> {
    pub fn new(wb: &'a Workbench, progress: &'a dyn Progress) -> Self {
        Self { wb, progress }
    }

    /// `<dest>/<name>/<name>.babylon`
    pub fn dictionary_path(dest: &Path, name: &str) -> PathBuf {
        dest.join(name).join(format!("{name}.babylon"))
    }

    // ── Entries ──────────────────────────────────────────────────────────────

    /// One definition per lakāra that yields any form.
    pub fn tinanta_definitions(
        &self,
        head: &str,
        headwords: &Headwords,
        dhatu: &Dhatu,
        prayoga: Prayoga,
    ) -> PrakriyaResult<Vec<Definition>> {
        let mut definitions = Vec::new();

        for &lakara in Lakara::ALL {
            let mut lakara_words = Headwords::new();
            let mut tables = Vec::new();

            for &pada in DhatuPada::ALL {
                let mut pada_words = Vec::new();
                let mut rows = Vec::new();

                for &purusha in Purusha::ALL {
                    let mut cells = Vec::new();
                    for &vacana in Vacana::ALL {
                        let spec = Specification::Tinanta(Tinanta {
                            dhatu: dhatu.clone(),
                            prayoga,
                            lakara,
                            purusha,
                            vacana,
                            pada: Some(pada),
                        });
                        let forms = self.forms(&spec)?;
                        cells.push(forms.join("/ "));
                        pada_words.extend(forms);
                    }
                    rows.push(cells.join(BR));
                }

                if pada_words.is_empty() {
                    continue;
                }
                let mut table_head = format!("{head} {}", self.wb.display(lakara.as_str()));
                if prayoga == Prayoga::Karmani {
                    table_head.push_str(KARMANI_HEAD);
                } else {
                    table_head.push(' ');
                    table_head.push_str(&self.wb.display(pada.as_str()));
                }
                tables.push(table_head);
                tables.push(rows.join("<BR>--<BR>"));
                lakara_words.extend(pada_words);
            }

            if lakara_words.is_empty() {
                continue;
            }
            let mut words = headwords.clone();
            words.extend(lakara_words.iter().cloned());
            let meaning = tables.join("<BR><BR>").replace("लृँत्", "लृँट्");
            definitions.push(Definition::new(words, meaning));
        }

        Ok(definitions)
    }

    /// A single definition listing every kṛt derivative of `dhatu`.
    pub fn krdanta_definition(
        &self,
        head: &str,
        headwords: &Headwords,
        dhatu: &Dhatu,
    ) -> PrakriyaResult<Definition> {
        let mut words = headwords.clone();
        let mut meaning = format!("{head}{BR}");

        for &krt in Krt::ALL {
            let spec = Specification::Krdanta(Krdanta {
                dhatu: dhatu.clone(),
                krt,
            });
            let krt_name = self.wb.display(krt.as_str());
            for form in self.forms(&spec)? {
                meaning.push_str(&format!("+ {krt_name} = {form}{BR}"));
                words.insert(form);
            }
        }

        Ok(Definition::new(words, meaning))
    }

    /// One definition per liṅga of a basic stem.
    pub fn subanta_definitions(
        &self,
        entry: &PratipadikaEntry,
    ) -> PrakriyaResult<Vec<Definition>> {
        let stem = self.wb.display(&entry.pratipadika.label());
        let mut definitions = Vec::new();

        for &linga in &entry.lingas {
            let mut words = Headwords::new();
            words.insert(stem.clone());
            let mut rows = Vec::new();

            for &vibhakti in Vibhakti::ALL {
                let mut cells = Vec::new();
                for &vacana in Vacana::ALL {
                    let spec = Specification::Subanta(Subanta {
                        pratipadika: entry.pratipadika.clone(),
                        linga,
                        vibhakti,
                        vacana,
                    });
                    let forms = self.forms(&spec)?;
                    cells.push(forms.join(", "));
                    words.extend(forms);
                }
                rows.push(cells.join("; "));
            }

            let linga_name: String = self.wb.display(linga.as_str()).chars().take(4).collect();
            let meaning = format!("{stem} {linga_name}{BR}{}", rows.join(BR));
            definitions.push(Definition::new(words, meaning));
        }

        Ok(definitions)
    }

    /// A single definition listing every taddhita derivative of a basic
    /// stem, headed by the stem and its liṅgas.
    pub fn taddhitanta_definition(&self, entry: &PratipadikaEntry) -> PrakriyaResult<Definition> {
        let stem = self.wb.display(&entry.pratipadika.label());
        let mut words = Headwords::new();
        words.insert(stem.clone());
        let mut lines = Vec::new();

        for &taddhita in Taddhita::ALL {
            let spec = Specification::Taddhitanta(Taddhitanta {
                pratipadika: entry.pratipadika.clone(),
                taddhita,
            });
            let forms = self.forms(&spec)?;
            if forms.is_empty() {
                continue;
            }
            lines.push(format!(
                "+ {} = {}",
                self.wb.display(taddhita.as_str()),
                forms.join(", ")
            ));
            words.extend(forms);
        }

        let lingas: Vec<&str> = entry.lingas.iter().map(|l| l.as_str()).collect();
        let meaning = format!(
            "{stem} {}{BR}{}",
            self.wb.display(&lingas.join(",")),
            lines.join(BR)
        );
        Ok(Definition::new(words, meaning))
    }

    /// Entry head, seed headwords and the sanādi-extended root for one
    /// dhātupāṭha entry.
    ///
    /// The head reads `{aupadeśika} {artha} ({gaṇa})`, followed by any root
    /// forms that differ from the aupadeśika, the antargaṇa, and the sanādi
    /// derivative when `sanadi` is non-empty.
    pub fn root_head(
        &self,
        entry: &DhatuEntry,
        sanadi: &[Sanadi],
    ) -> PrakriyaResult<(String, Headwords, Dhatu)> {
        let aupadeshika = self
            .wb
            .display(entry.dhatu.aupadeshika().unwrap_or(&entry.dhatu.label()));
        let mut headwords = Headwords::new();
        headwords.insert(aupadeshika.clone());
        headwords.insert(strip_accents(&aupadeshika, false));
        headwords.insert(strip_accents(&aupadeshika, true));

        let mut head = format!("{aupadeshika} {}", self.wb.display(&entry.artha));
        if let Some(gana) = entry.dhatu.gana() {
            head.push_str(&format!(" ({})", self.wb.display(gana.as_str())));
        }

        let root_spec = Specification::Dhatu {
            dhatu: entry.dhatu.clone(),
        };
        for form in self.forms(&root_spec)? {
            if form != aupadeshika {
                head.push(' ');
                head.push_str(&form);
                headwords.insert(form);
            }
        }

        if let Some(antargana) = &entry.antargana {
            head.push_str(&format!(" ({})", self.wb.display(antargana)));
        }

        let extended = entry.dhatu.with_sanadi(sanadi);
        let extended_spec = Specification::Dhatu {
            dhatu: extended.clone(),
        };
        let mut sanadi_note = String::new();
        for form in self.forms(&extended_spec)? {
            if !sanadi.is_empty() {
                let names: Vec<String> =
                    sanadi.iter().map(|s| self.wb.display(s.as_str())).collect();
                sanadi_note = format!(" + {} = {form}", names.join("+ "));
            }
            headwords.insert(form);
        }
        head.push_str(&sanadi_note);

        Ok((head, headwords, extended))
    }

    // ── Dumps ────────────────────────────────────────────────────────────────

    /// Tiṅanta dictionaries: every sanādi table, kartari and karmaṇi.
    #[instrument(skip(self))]
    pub fn dump_tinanta(&self, dest: &Path, overwrite: bool) -> PrakriyaResult<Vec<PathBuf>> {
        self.dump_roots(
            dest,
            SanadiTable::TINANTA,
            &[Prayoga::Kartari, Prayoga::Karmani],
            RootDictionary::Tinanta,
            overwrite,
        )
    }

    /// Kṛdanta dictionaries: every sanādi table, kartari only.
    #[instrument(skip(self))]
    pub fn dump_krdanta(&self, dest: &Path, overwrite: bool) -> PrakriyaResult<Vec<PathBuf>> {
        self.dump_roots(
            dest,
            SanadiTable::KRDANTA,
            &[Prayoga::Kartari],
            RootDictionary::Krdanta,
            overwrite,
        )
    }

    fn dump_roots(
        &self,
        dest: &Path,
        tables: &[SanadiTable],
        prayogas: &[Prayoga],
        kind: RootDictionary,
        overwrite: bool,
    ) -> PrakriyaResult<Vec<PathBuf>> {
        let entries = self.wb.lexicon().dhatus()?;
        let mut written = Vec::new();

        for table in tables {
            for &prayoga in prayogas {
                let name = match prayoga {
                    Prayoga::Kartari => table.name.to_string(),
                    _ => format!("{}{KARMANI_SUFFIX}", table.name),
                };
                let path = Self::dictionary_path(dest, &name);
                if !overwrite && self.wb.filesystem().exists(&path) {
                    info!(dictionary = %name, "Skipping existing dictionary");
                    continue;
                }

                info!(dictionary = %name, roots = entries.len(), "Producing dictionary");
                self.progress.start(&name, Some(entries.len() as u64));
                let mut definitions = Vec::new();
                for entry in &entries {
                    let (head, headwords, dhatu) = self.root_head(entry, table.sanadi)?;
                    match kind {
                        RootDictionary::Tinanta => definitions.extend(
                            self.tinanta_definitions(&head, &headwords, &dhatu, prayoga)?,
                        ),
                        RootDictionary::Krdanta => {
                            definitions.push(self.krdanta_definition(&head, &headwords, &dhatu)?)
                        }
                    }
                    self.progress.advance();
                }
                self.progress
                    .finish(&format!("Got {} definitions for {name}", definitions.len()));

                self.write_babylon(&path, &definitions)?;
                written.push(path);
            }
        }

        Ok(written)
    }

    /// Subanta dictionaries, one per shard. Kṛdanta stems are skipped.
    #[instrument(skip(self))]
    pub fn dump_subanta(&self, dest: &Path, overwrite: bool) -> PrakriyaResult<Vec<PathBuf>> {
        self.dump_stems(dest, StemShard::SUBANTA, overwrite, |entry| {
            self.subanta_definitions(entry)
        })
    }

    /// Taddhitānta dictionaries, one per shard. Kṛdanta stems are skipped.
    #[instrument(skip(self))]
    pub fn dump_taddhitanta(&self, dest: &Path, overwrite: bool) -> PrakriyaResult<Vec<PathBuf>> {
        self.dump_stems(dest, StemShard::TADDHITANTA, overwrite, |entry| {
            Ok(vec![self.taddhitanta_definition(entry)?])
        })
    }

    fn dump_stems<F>(
        &self,
        dest: &Path,
        shards: &[StemShard],
        overwrite: bool,
        definitions_of: F,
    ) -> PrakriyaResult<Vec<PathBuf>>
    where
        F: Fn(&PratipadikaEntry) -> PrakriyaResult<Vec<Definition>>,
    {
        let stems = self.wb.lexicon().pratipadikas()?;
        let mut written = Vec::new();

        for shard in shards {
            let name = shard.dictionary_name();
            let path = Self::dictionary_path(dest, &name);
            if !overwrite && self.wb.filesystem().exists(&path) {
                info!(dictionary = %name, "Skipping existing dictionary");
                continue;
            }

            info!(dictionary = %name, "Producing dictionary");
            self.progress.start(&format!("Processing {name}"), None);
            let mut definitions = Vec::new();
            for entry in &stems {
                if matches!(entry.pratipadika, Pratipadika::Krdanta { .. }) {
                    continue;
                }
                if !shard.contains(&self.wb.display(&entry.pratipadika.label())) {
                    continue;
                }
                definitions.extend(definitions_of(entry)?);
                self.progress.advance();
            }
            self.progress
                .finish(&format!("Got {} definitions for {name}", definitions.len()));

            self.write_babylon(&path, &definitions)?;
            written.push(path);
        }

        Ok(written)
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    /// Display forms of every derivation result for `spec`.
    fn forms(&self, spec: &Specification) -> PrakriyaResult<Vec<String>> {
        Ok(self
            .wb
            .derive(spec)?
            .iter()
            .map(|p| self.wb.display(&p.text))
            .collect())
    }

    fn write_babylon(&self, path: &Path, definitions: &[Definition]) -> PrakriyaResult<()> {
        if let Some(parent) = path.parent() {
            self.wb.filesystem().create_dir_all(parent)?;
        }
        self.wb
            .filesystem()
            .write_file(path, &render_babylon(definitions))?;
        debug!(path = %path.display(), definitions = definitions.len(), "Wrote dictionary");
        Ok(())
    }
}

/// Drop Vedic accent marks, and the candrabindu too when `candrabindu` is set.
fn strip_accents(text: &str, candrabindu: bool) -> String {
    text.chars()
        .filter(|c| !ACCENTS.contains(c) && !(candrabindu && *c == CANDRABINDU))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ports::{MockDeriver, MockLexicon, NoProgress},
        testing,
    };
    use crate::domain::{Gana, Linga, Prakriya, SutraTable};
    use std::cell::RefCell;

    fn form(text: &str) -> Vec<Prakriya> {
        vec![Prakriya::new(text, vec![])]
    }

    fn bhu() -> Dhatu {
        Dhatu::mula("BU", Gana::Bhvadi)
    }

    fn lat_parasmai(spec: &Specification) -> Vec<Prakriya> {
        match spec {
            Specification::Tinanta(t)
                if t.lakara == Lakara::Lat
                    && t.pada == Some(DhatuPada::Parasmaipada)
                    && t.purusha == Purusha::Prathama =>
            {
                match t.vacana {
                    Vacana::Eka => form("Bavati"),
                    Vacana::Bahu => form("Bavanti"),
                    Vacana::Dvi => vec![],
                }
            }
            _ => vec![],
        }
    }

    #[derive(Default)]
    struct CountingProgress {
        events: RefCell<Vec<String>>,
    }

    impl Progress for CountingProgress {
        fn start(&self, label: &str, total: Option<u64>) {
            self.events.borrow_mut().push(format!("start {label} {total:?}"));
        }

        fn advance(&self) {
            self.events.borrow_mut().push("advance".into());
        }

        fn finish(&self, message: &str) {
            self.events.borrow_mut().push(format!("finish {message}"));
        }
    }

    #[test]
    fn tinanta_tables_group_forms_by_person() {
        let mut deriver = MockDeriver::new();
        deriver.expect_derive().returning(|spec| Ok(lat_parasmai(spec)));
        let (wb, _) = testing::workbench(testing::unused_lexicon(), deriver, SutraTable::new());
        let service = DictionaryService::new(&wb, &NoProgress);
        let seed: Headwords = ["भू"].into_iter().collect();

        let defs = service
            .tinanta_definitions("HEAD", &seed, &bhu(), Prayoga::Kartari)
            .unwrap();

        assert_eq!(defs.len(), 1);
        let words: Vec<_> = defs[0].headwords.iter().map(String::as_str).collect();
        assert_eq!(words, ["भू", "भवति", "भवन्ति"]);
        assert_eq!(
            defs[0].meaning,
            "HEAD law parasmEpadam<BR><BR>भवति<BR><BR>भवन्ति<BR>--<BR><BR><BR><BR>--<BR><BR><BR>"
        );
    }

    #[test]
    fn karmani_tables_are_headed_akartari() {
        let mut deriver = MockDeriver::new();
        deriver.expect_derive().returning(|spec| Ok(lat_parasmai(spec)));
        let (wb, _) = testing::workbench(testing::unused_lexicon(), deriver, SutraTable::new());

        let defs = DictionaryService::new(&wb, &NoProgress)
            .tinanta_definitions("HEAD", &Headwords::new(), &bhu(), Prayoga::Karmani)
            .unwrap();
        assert!(defs[0].meaning.starts_with("HEAD law अकर्तरि<BR><BR><BR><BR>भवति"));
    }

    #[test]
    fn krdanta_entry_lists_each_derivative() {
        let mut deriver = MockDeriver::new();
        deriver.expect_derive().returning(|spec| {
            Ok(match spec {
                Specification::Krdanta(k) if k.krt == Krt::kta => form("BUta"),
                Specification::Krdanta(k) if k.krt == Krt::tumun => form("Bavitum"),
                _ => vec![],
            })
        });
        let (wb, _) = testing::workbench(testing::unused_lexicon(), deriver, SutraTable::new());

        let def = DictionaryService::new(&wb, &NoProgress)
            .krdanta_definition("HEAD", &Headwords::new(), &bhu())
            .unwrap();
        assert_eq!(def.meaning, "HEAD<BR>+ kta = BUta<BR>+ tumun = Bavitum<BR>");
        assert_eq!(def.headwords.len(), 2);
    }

    #[test]
    fn subanta_entry_abbreviates_the_linga() {
        let mut deriver = MockDeriver::new();
        deriver.expect_derive().returning(|spec| {
            Ok(match spec {
                Specification::Subanta(s) if s.vibhakti == Vibhakti::Prathama => match s.vacana {
                    Vacana::Eka => form("nadI"),
                    _ => vec![],
                },
                _ => vec![],
            })
        });
        let (wb, _) = testing::workbench(testing::unused_lexicon(), deriver, SutraTable::new());
        let entry = PratipadikaEntry {
            pratipadika: Pratipadika::nyap("nadI"),
            lingas: vec![Linga::Stri],
        };

        let defs = DictionaryService::new(&wb, &NoProgress)
            .subanta_definitions(&entry)
            .unwrap();
        assert_eq!(defs.len(), 1);
        assert!(defs[0].meaning.starts_with("नदी strI<BR>नदी; ; <BR>; ; <BR>"));
        assert_eq!(defs[0].headwords.len(), 1);
    }

    #[test]
    fn root_head_mentions_sanadi_derivative() {
        let mut deriver = MockDeriver::new();
        deriver.expect_derive().returning(|spec| {
            Ok(match spec {
                Specification::Dhatu { dhatu } if dhatu.sanadi().is_empty() => form("BU"),
                Specification::Dhatu { .. } => form("BAvi"),
                _ => vec![],
            })
        });
        let (wb, _) = testing::workbench(testing::unused_lexicon(), deriver, SutraTable::new());
        let entry = DhatuEntry::new(bhu(), "sattAyAm");

        let (head, words, dhatu) = DictionaryService::new(&wb, &NoProgress)
            .root_head(&entry, &[Sanadi::Nic])
            .unwrap();
        assert_eq!(head, "भू sattAyAm (BvAdiH) + Ric = BAvi");
        assert_eq!(dhatu.label(), "BU+Ric");
        let words: Vec<_> = words.iter().map(String::as_str).collect();
        assert_eq!(words, ["भू", "BAvi"]);
    }

    #[test]
    fn accents_and_candrabindu_are_stripped() {
        assert_eq!(strip_accents("भू\u{0951}", false), "भू");
        assert_eq!(strip_accents("चु\u{0952}रँ", false), "चुरँ");
        assert_eq!(strip_accents("चु\u{0952}रँ", true), "चुर");
    }

    #[test]
    fn shards_partition_by_first_letter() {
        let find = |stem: &str| {
            StemShard::SUBANTA
                .iter()
                .find(|s| s.contains(stem))
                .map(|s| s.name)
        };
        assert_eq!(find("अग्नि"), Some("a"));
        assert_eq!(find("नदी"), Some("tu1"));
        assert_eq!(find("हरि"), Some("shal"));
        assert_eq!(find("abc"), Some("a"));
    }

    #[test]
    fn krdanta_dump_writes_every_table_once() {
        let mut lexicon = MockLexicon::new();
        lexicon
            .expect_dhatus()
            .returning(|| Ok(vec![DhatuEntry::new(bhu(), "sattAyAm")]));
        let mut deriver = MockDeriver::new();
        deriver.expect_derive().returning(|_| Ok(vec![]));
        let (wb, fs) = testing::workbench(lexicon, deriver, SutraTable::new());
        let progress = CountingProgress::default();
        let service = DictionaryService::new(&wb, &progress);
        let dest = Path::new("dicts");

        let written = service.dump_krdanta(dest, false).unwrap();
        assert_eq!(written.len(), SanadiTable::KRDANTA.len());
        assert_eq!(
            written[0],
            Path::new("dicts/vidyut-kRdanta/vidyut-kRdanta.babylon")
        );
        assert!(
            fs.files.lock().unwrap()[&written[0]] == "भू\nभू sattAyAm (BvAdiH)<BR>\n\n"
        );
        assert_eq!(
            progress.events.borrow()[..3],
            [
                "start vidyut-kRdanta Some(1)".to_string(),
                "advance".to_string(),
                "finish Got 1 definitions for vidyut-kRdanta".to_string(),
            ]
        );

        // Second run without overwrite leaves everything alone.
        assert!(service.dump_krdanta(dest, false).unwrap().is_empty());
        assert_eq!(
            service.dump_krdanta(dest, true).unwrap().len(),
            SanadiTable::KRDANTA.len()
        );
    }

    #[test]
    fn tinanta_dump_adds_akartari_variants() {
        let mut lexicon = MockLexicon::new();
        lexicon.expect_dhatus().returning(|| Ok(vec![]));
        let (wb, fs) = testing::workbench(lexicon, testing::unused_deriver(), SutraTable::new());

        let written = DictionaryService::new(&wb, &NoProgress)
            .dump_tinanta(Path::new("d"), false)
            .unwrap();
        assert_eq!(written.len(), SanadiTable::TINANTA.len() * 2);
        let akartari = Path::new("d/vidyut-tiN-akartari/vidyut-tiN-akartari.babylon");
        assert!(written.iter().any(|p| p == akartari));
        assert!(fs.files.lock().unwrap().values().all(String::is_empty));
    }

    #[test]
    fn subanta_dump_skips_krdanta_stems_and_shards() {
        let mut lexicon = MockLexicon::new();
        lexicon.expect_pratipadikas().returning(|| {
            Ok(vec![
                PratipadikaEntry {
                    pratipadika: Pratipadika::nyap("nadI"),
                    lingas: vec![Linga::Stri],
                },
                PratipadikaEntry {
                    pratipadika: Pratipadika::krdanta(bhu(), Krt::kvip),
                    lingas: vec![Linga::Pum],
                },
            ])
        });
        let mut deriver = MockDeriver::new();
        deriver.expect_derive().returning(|_| Ok(vec![]));
        let (wb, fs) = testing::workbench(lexicon, deriver, SutraTable::new());

        let written = DictionaryService::new(&wb, &NoProgress)
            .dump_subanta(Path::new("d"), false)
            .unwrap();
        assert_eq!(written.len(), StemShard::SUBANTA.len());

        let files = fs.files.lock().unwrap();
        let tu = &files[Path::new("d/vidyut-subanta-tu1/vidyut-subanta-tu1.babylon")];
        assert!(tu.starts_with("नदी\nनदी strI<BR>"));
        let non_empty = files.values().filter(|c| !c.is_empty()).count();
        assert_eq!(non_empty, 1);
    }

    #[test]
    fn taddhitanta_entry_lists_productive_suffixes() {
        let mut deriver = MockDeriver::new();
        deriver.expect_derive().returning(|spec| {
            Ok(match spec {
                Specification::Taddhitanta(t) if t.taddhita == Taddhita::aR => form("Opagava"),
                Specification::Taddhitanta(t) if t.taddhita == Taddhita::matup => {
                    vec![Prakriya::new("x", vec![]), Prakriya::new("y", vec![])]
                }
                _ => vec![],
            })
        });
        let (wb, _) = testing::workbench(testing::unused_lexicon(), deriver, SutraTable::new());
        let entry = PratipadikaEntry {
            pratipadika: Pratipadika::basic("nadI"),
            lingas: vec![Linga::Stri, Linga::Pum],
        };

        let def = DictionaryService::new(&wb, &NoProgress)
            .taddhitanta_definition(&entry)
            .unwrap();
        assert_eq!(
            def.meaning,
            "नदी strIliNga,puMliNga<BR>+ aR = Opagava<BR>+ matu~p = क्ष, य"
        );
        let words: Vec<_> = def.headwords.iter().map(String::as_str).collect();
        assert_eq!(words, ["नदी", "Opagava", "क्ष", "य"]);
    }

    #[test]
    fn taddhitanta_shards_split_the_labials_and_sibilants() {
        let find = |stem: &str| {
            StemShard::TADDHITANTA
                .iter()
                .find(|s| s.contains(stem))
                .map(StemShard::dictionary_name)
        };
        assert_eq!(StemShard::TADDHITANTA.len(), 14);
        assert_eq!(find("पुत्र").as_deref(), Some("vidyut-taddhitAnta-p"));
        assert_eq!(find("बाल").as_deref(), Some("vidyut-taddhitAnta-b"));
        assert_eq!(find("लता").as_deref(), Some("vidyut-taddhitAnta-lv"));
        assert_eq!(find("वन").as_deref(), Some("vidyut-taddhitAnta-lv"));
        assert_eq!(find("शिव").as_deref(), Some("vidyut-taddhitAnta-sh"));
        assert_eq!(find("हरि").as_deref(), Some("vidyut-taddhitAnta-hal"));
    }

    #[test]
    fn taddhitanta_dump_writes_each_shard_and_skips_existing() {
        let mut lexicon = MockLexicon::new();
        lexicon.expect_pratipadikas().returning(|| {
            Ok(vec![
                PratipadikaEntry {
                    pratipadika: Pratipadika::nyap("nadI"),
                    lingas: vec![Linga::Stri],
                },
                PratipadikaEntry {
                    pratipadika: Pratipadika::krdanta(bhu(), Krt::kvip),
                    lingas: vec![Linga::Pum],
                },
            ])
        });
        let mut deriver = MockDeriver::new();
        deriver.expect_derive().returning(|spec| {
            Ok(match spec {
                Specification::Taddhitanta(t) if t.taddhita == Taddhita::aR => form("nAdeya"),
                _ => vec![],
            })
        });
        let (wb, fs) = testing::workbench(lexicon, deriver, SutraTable::new());
        let service = DictionaryService::new(&wb, &NoProgress);
        let dest = Path::new("d");

        let written = service.dump_taddhitanta(dest, false).unwrap();
        assert_eq!(written.len(), StemShard::TADDHITANTA.len());
        {
            let files = fs.files.lock().unwrap();
            let tu = &files
                [Path::new("d/vidyut-taddhitAnta-tu1/vidyut-taddhitAnta-tu1.babylon")];
            assert_eq!(tu, "नदी|nAdeya\nनदी strIliNga<BR>+ aR = nAdeya\n\n");
            assert_eq!(files.values().filter(|c| !c.is_empty()).count(), 1);
        }

        assert!(service.dump_taddhitanta(dest, false).unwrap().is_empty());
    }
}
