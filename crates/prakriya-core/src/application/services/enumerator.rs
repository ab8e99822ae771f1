//! Category enumeration.
//!
//! Each routine walks the product of grammatical categories for one root or
//! stem, derives every leaf, and nests the formatted traces in a
//! [`Section`] tree. Combinations that derive nothing leave no heading.
//!
//! Heading layout (top-level sections render at `##`):
//!
//! | Routine   | Nesting                                                        |
//! |-----------|----------------------------------------------------------------|
//! | tiṅanta   | prayoga › lakāra › (pada) › puruṣa vacana › trace              |
//! | subanta   | liṅga › vibhakti vacana › trace                                |
//! | kṛdanta   | kṛt › trace                                                    |

use tracing::{debug, error, info, instrument};

use crate::{
    application::{LookupService, TraceFormatter, Workbench},
    domain::{
        Dhatu, DhatuPada, Document, EntryKind, Krdanta, Krt, Lakara, Linga, Pratipadika, Prayoga,
        Purusha, Sanadi, Section, Specification, Subanta, Tinanta, TraceBlocks, Vacana, Vibhakti,
    },
    error::PrakriyaResult,
};

/// Knobs for the verbal walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbalOptions {
    pub prayogas: Vec<Prayoga>,
    /// Split every lakāra into parasmaipada and ātmanepada subsections.
    pub by_pada: bool,
    /// Appended to every root before deriving.
    pub sanadi: Vec<Sanadi>,
}

impl Default for VerbalOptions {
    fn default() -> Self {
        Self {
            prayogas: vec![Prayoga::Kartari],
            by_pada: false,
            sanadi: Vec::new(),
        }
    }
}

/// The nominal product. Defaults to every value on each axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominalAxes {
    pub lingas: Vec<Linga>,
    pub vibhaktis: Vec<Vibhakti>,
    pub vacanas: Vec<Vacana>,
}

impl Default for NominalAxes {
    fn default() -> Self {
        Self {
            lingas: Linga::ALL.to_vec(),
            vibhaktis: Vibhakti::ALL.to_vec(),
            vacanas: Vacana::ALL.to_vec(),
        }
    }
}

/// How a nominal stem is built from the user's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubantaMode {
    #[default]
    Basic,
    /// The text already ends in a feminine ṅī / āp suffix.
    Nyap,
    /// The text is a finite verb; each of its roots takes `kvip`.
    Kvip,
}

pub struct Enumerator<'a> {
    wb: &'a Workbench,
    formatter: TraceFormatter<'a>,
}

impl<'a> Enumerator<'a> {
    pub fn new(wb: &'a Workbench) -> Self {
        Self {
            wb,
            formatter: TraceFormatter::new(wb),
        }
    }

    // ── Verbal ───────────────────────────────────────────────────────────────

    /// Every finite form of `dhatu`, one document.
    #[instrument(skip_all, fields(dhatu = %dhatu.label()))]
    pub fn tinanta(&self, dhatu: &Dhatu, options: &VerbalOptions) -> PrakriyaResult<Document> {
        let dhatu = dhatu.with_sanadi(&options.sanadi);
        let mut sections = Vec::new();

        for &prayoga in &options.prayogas {
            let mut prayoga_section = Section::new(self.wb.display(prayoga.as_str()));
            for &lakara in Lakara::ALL {
                let mut lakara_section = Section::new(self.wb.display(lakara.as_str()));
                if options.by_pada {
                    for &pada in DhatuPada::ALL {
                        let mut pada_section = Section::new(self.wb.display(pada.as_str()));
                        self.fill_person_number(
                            &mut pada_section,
                            &dhatu,
                            prayoga,
                            lakara,
                            Some(pada),
                        )?;
                        lakara_section.push_child(pada_section);
                    }
                } else {
                    self.fill_person_number(&mut lakara_section, &dhatu, prayoga, lakara, None)?;
                }
                if lakara_section.is_empty() {
                    debug!(%prayoga, %lakara, "No forms");
                }
                prayoga_section.push_child(lakara_section);
            }
            push_section(&mut sections, prayoga_section);
        }

        Ok(self.document(&dhatu.label(), &sections))
    }

    fn fill_person_number(
        &self,
        parent: &mut Section,
        dhatu: &Dhatu,
        prayoga: Prayoga,
        lakara: Lakara,
        pada: Option<DhatuPada>,
    ) -> PrakriyaResult<()> {
        for &purusha in Purusha::ALL {
            for &vacana in Vacana::ALL {
                let spec = Specification::Tinanta(Tinanta {
                    dhatu: dhatu.clone(),
                    prayoga,
                    lakara,
                    purusha,
                    vacana,
                    pada,
                });
                let leaf = Section::new(self.wb.display(&format!("{purusha} {vacana}")))
                    .with_blocks(self.traces(&spec)?);
                parent.push_child(leaf);
            }
        }
        Ok(())
    }

    /// Verbal documents for every root behind the finite form `surface`.
    pub fn tinanta_for(
        &self,
        surface: &str,
        options: &VerbalOptions,
    ) -> PrakriyaResult<Vec<Document>> {
        self.roots_of(surface)?
            .iter()
            .map(|dhatu| self.tinanta(dhatu, options))
            .collect()
    }

    // ── Nominal ──────────────────────────────────────────────────────────────

    /// Every declined form of `pratipadika` over `axes`, one document.
    #[instrument(skip_all, fields(stem = %pratipadika.label()))]
    pub fn subanta(
        &self,
        pratipadika: &Pratipadika,
        axes: &NominalAxes,
    ) -> PrakriyaResult<Document> {
        let mut sections = Vec::new();

        for &linga in &axes.lingas {
            let mut linga_section = Section::new(self.wb.display(linga.as_str()));
            for &vibhakti in &axes.vibhaktis {
                for &vacana in &axes.vacanas {
                    let spec = Specification::Subanta(Subanta {
                        pratipadika: pratipadika.clone(),
                        linga,
                        vibhakti,
                        vacana,
                    });
                    let leaf = Section::new(self.wb.display(&format!("{vibhakti} {vacana}")))
                        .with_blocks(self.traces(&spec)?);
                    linga_section.push_child(leaf);
                }
            }
            push_section(&mut sections, linga_section);
        }

        Ok(self.document(&pratipadika.label(), &sections))
    }

    /// Build the stem(s) for `text` according to `mode` and decline each.
    ///
    /// In [`SubantaMode::Kvip`] mode `text` is looked up as a finite verb; a
    /// miss is logged and yields no documents.
    pub fn subanta_mode(
        &self,
        text: &str,
        mode: SubantaMode,
        axes: &NominalAxes,
    ) -> PrakriyaResult<Vec<Document>> {
        let stems = match mode {
            SubantaMode::Basic => vec![Pratipadika::basic(self.wb.lookup_key(text))],
            SubantaMode::Nyap => vec![Pratipadika::nyap(self.wb.lookup_key(text))],
            SubantaMode::Kvip => self
                .roots_of(text)?
                .into_iter()
                .map(|dhatu| Pratipadika::krdanta(dhatu, Krt::kvip))
                .collect(),
        };
        stems.iter().map(|stem| self.subanta(stem, axes)).collect()
    }

    // ── Derived stems ────────────────────────────────────────────────────────

    /// Every kṛdanta of `dhatu`, one heading per productive suffix.
    #[instrument(skip_all, fields(dhatu = %dhatu.label()))]
    pub fn krdanta(&self, dhatu: &Dhatu) -> PrakriyaResult<Document> {
        let mut sections = Vec::new();
        for &krt in Krt::ALL {
            let spec = Specification::Krdanta(Krdanta {
                dhatu: dhatu.clone(),
                krt,
            });
            let section =
                Section::new(self.wb.display(krt.as_str())).with_blocks(self.traces(&spec)?);
            push_section(&mut sections, section);
        }
        Ok(self.document(&dhatu.label(), &sections))
    }

    /// Kṛdanta documents for every root behind the finite form `surface`,
    /// each extended with `sanadi`.
    pub fn krdanta_for(&self, surface: &str, sanadi: &[Sanadi]) -> PrakriyaResult<Vec<Document>> {
        self.roots_of(surface)?
            .iter()
            .map(|dhatu| self.krdanta(&dhatu.with_sanadi(sanadi)))
            .collect()
    }

    // ── Direct lookup ────────────────────────────────────────────────────────

    /// Derive every entry matching `surface`; one document per distinct
    /// final form, titled with that form.
    #[instrument(skip(self))]
    pub fn lookup_and_derive(
        &self,
        surface: &str,
        kind: Option<EntryKind>,
    ) -> PrakriyaResult<Vec<Document>> {
        let entries = match LookupService::new(self.wb).lookup(surface, kind) {
            Ok(entries) => entries,
            Err(e) if e.is_recoverable() => {
                error!("{e}");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut blocks = TraceBlocks::new();
        for entry in &entries {
            blocks.extend(self.traces(&entry.to_specification())?);
        }
        info!(entries = entries.len(), forms = blocks.len(), "Derived entries");

        Ok(blocks
            .iter()
            .map(|block| Document::new(block.heading(), block.render()))
            .collect())
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn traces(&self, spec: &Specification) -> PrakriyaResult<TraceBlocks> {
        let prakriyas = self.wb.derive(spec)?;
        Ok(self.formatter.format(&prakriyas))
    }

    /// Roots of the finite-verb entries for `surface`; empty on a miss.
    fn roots_of(&self, surface: &str) -> PrakriyaResult<Vec<Dhatu>> {
        match LookupService::new(self.wb).dhatus(surface) {
            Err(e) if e.is_recoverable() => {
                error!("{e}");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn document(&self, label: &str, sections: &[Section]) -> Document {
        let title = self.wb.display(label);
        let doc = Document::from_sections(title, sections);
        info!(title = doc.title(), sections = sections.len(), "Built document");
        doc
    }
}

fn push_section(sections: &mut Vec<Section>, section: Section) {
    if !section.is_empty() {
        sections.push(section);
    }
}
