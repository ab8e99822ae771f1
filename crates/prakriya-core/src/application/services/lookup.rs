//! Dictionary lookup.
//!
//! Surface forms arrive in display script (or already in SLP1) and are
//! transliterated before the lexicon sees them. A miss is reported as the
//! recoverable [`ApplicationError::LookupMiss`].

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, Workbench},
    domain::{Dhatu, EntryKind, LexicalEntry},
    error::PrakriyaResult,
};

pub struct LookupService<'a> {
    wb: &'a Workbench,
}

impl<'a> LookupService<'a> {
    pub fn new(wb: &'a Workbench) -> Self {
        Self { wb }
    }

    /// Entries for `surface`, optionally restricted to one kind.
    #[instrument(skip(self))]
    pub fn lookup(
        &self,
        surface: &str,
        kind: Option<EntryKind>,
    ) -> PrakriyaResult<Vec<LexicalEntry>> {
        let key = self.wb.lookup_key(surface);
        let mut entries = self.wb.lexicon().get(&key)?;
        debug!(key = %key, found = entries.len(), "Lexicon lookup");

        if let Some(kind) = kind {
            entries.retain(|e| e.kind() == kind);
        }

        if entries.is_empty() {
            return Err(ApplicationError::LookupMiss {
                surface: surface.to_string(),
                kind,
            }
            .into());
        }
        Ok(entries)
    }

    /// Distinct roots behind the finite-verb entries for `surface`, in
    /// lookup order.
    pub fn dhatus(&self, surface: &str) -> PrakriyaResult<Vec<Dhatu>> {
        let mut roots: Vec<Dhatu> = Vec::new();
        for entry in self.lookup(surface, Some(EntryKind::Tinanta))? {
            if let Some(dhatu) = entry.dhatu() {
                if !roots.contains(dhatu) {
                    roots.push(dhatu.clone());
                }
            }
        }
        Ok(roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ports::MockLexicon, testing};
    use crate::domain::{
        DhatuEntry, Gana, Lakara, Linga, Pratipadika, PratipadikaEntry, Prayoga, Purusha,
        SubantaEntry, SutraTable, TinantaEntry, Vacana, Vibhakti,
    };
    use mockall::predicate::eq;

    fn tinanta(aupadeshika: &str, purusha: Purusha) -> LexicalEntry {
        LexicalEntry::Tinanta(TinantaEntry {
            dhatu_entry: DhatuEntry::new(Dhatu::mula(aupadeshika, Gana::Curadi), "steye"),
            prayoga: Prayoga::Kartari,
            lakara: Lakara::Lat,
            purusha,
            vacana: Vacana::Eka,
            pada: None,
        })
    }

    fn subanta() -> LexicalEntry {
        LexicalEntry::Subanta(SubantaEntry {
            pratipadika_entry: PratipadikaEntry {
                pratipadika: Pratipadika::basic("corayat"),
                lingas: vec![Linga::Pum],
            },
            linga: Linga::Pum,
            vibhakti: Vibhakti::Saptami,
            vacana: Vacana::Eka,
        })
    }

    #[test]
    fn known_form_is_transliterated_before_lookup() {
        let mut lexicon = MockLexicon::new();
        lexicon
            .expect_get()
            .with(eq("corayati"))
            .times(1)
            .returning(|_| Ok(vec![tinanta("cura~", Purusha::Prathama), subanta()]));
        let (wb, _) = testing::workbench(lexicon, testing::unused_deriver(), SutraTable::new());

        let entries = LookupService::new(&wb).lookup("चोरयति", None).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn kind_filter_keeps_matching_entries() {
        let mut lexicon = MockLexicon::new();
        lexicon
            .expect_get()
            .returning(|_| Ok(vec![tinanta("cura~", Purusha::Prathama), subanta()]));
        let (wb, _) = testing::workbench(lexicon, testing::unused_deriver(), SutraTable::new());

        let entries = LookupService::new(&wb)
            .lookup("corayati", Some(EntryKind::Tinanta))
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind(), EntryKind::Tinanta);
    }

    #[test]
    fn unknown_form_is_a_recoverable_miss() {
        let mut lexicon = MockLexicon::new();
        lexicon.expect_get().returning(|_| Ok(vec![]));
        let (wb, _) = testing::workbench(lexicon, testing::unused_deriver(), SutraTable::new());

        let err = LookupService::new(&wb).lookup("qqq", None).unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("Can't get entry for qqq"));
    }

    #[test]
    fn filtered_to_nothing_is_a_miss() {
        let mut lexicon = MockLexicon::new();
        lexicon.expect_get().returning(|_| Ok(vec![subanta()]));
        let (wb, _) = testing::workbench(lexicon, testing::unused_deriver(), SutraTable::new());

        let err = LookupService::new(&wb)
            .lookup("corayati", Some(EntryKind::Tinanta))
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn dhatus_are_deduplicated() {
        let mut lexicon = MockLexicon::new();
        lexicon.expect_get().returning(|_| {
            Ok(vec![
                tinanta("cura~", Purusha::Prathama),
                tinanta("cura~", Purusha::Madhyama),
                tinanta("cuwa~", Purusha::Prathama),
            ])
        });
        let (wb, _) = testing::workbench(lexicon, testing::unused_deriver(), SutraTable::new());

        let roots = LookupService::new(&wb).dhatus("corayati").unwrap();
        let labels: Vec<_> = roots.iter().map(Dhatu::label).collect();
        assert_eq!(labels, ["cura~", "cuwa~"]);
    }
}
