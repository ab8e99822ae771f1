//! The vidyut derivation engine behind the [`Deriver`] port.

use tracing::trace;
use vidyut_prakriya::{Prakriya as EnginePrakriya, Rule, Vyakarana};

use prakriya_core::{
    application::{ApplicationError, ports::Deriver},
    domain::{Prakriya, Specification, Step},
    error::PrakriyaResult,
};

use super::args::EngineArgs;

/// Derives every specification with `vidyut_prakriya`, keeping the full
/// rule history of each result.
pub struct VidyutDeriver {
    vyakarana: Vyakarana,
}

impl VidyutDeriver {
    pub fn new() -> Self {
        Self {
            vyakarana: Vyakarana::builder().log_steps(true).build(),
        }
    }
}

impl Default for VidyutDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Deriver for VidyutDeriver {
    fn derive(&self, spec: &Specification) -> PrakriyaResult<Vec<Prakriya>> {
        let args = EngineArgs::from_spec(spec).map_err(|reason| {
            ApplicationError::DerivationFailed {
                spec: spec.to_string(),
                reason,
            }
        })?;
        let v = &self.vyakarana;
        let prakriyas = match &args {
            EngineArgs::Tinanta(t) => v.derive_tinantas(t),
            EngineArgs::Subanta(s) => v.derive_subantas(s),
            EngineArgs::Krdanta(k) => v.derive_krdantas(k),
            EngineArgs::Taddhitanta(t) => v.derive_taddhitantas(t),
            EngineArgs::Dhatu(d) => v.derive_dhatus(d),
        };
        trace!(%spec, results = prakriyas.len(), "Engine call");
        Ok(prakriyas.iter().map(to_domain).collect())
    }
}

fn to_domain(prakriya: &EnginePrakriya) -> Prakriya {
    let history = prakriya
        .history()
        .iter()
        .map(|step| {
            let rule = step.rule();
            Step::new(
                source_name(rule),
                rule.code(),
                step.result().iter().map(|term| term.text().to_string()),
            )
        })
        .collect();
    Prakriya::new(prakriya.text(), history)
}

/// The rule source as it appears in trace lines and sūtra tables.
fn source_name(rule: Rule) -> &'static str {
    match rule {
        Rule::Ashtadhyayi(_) => "Ashtadhyayi",
        Rule::Varttika(_) => "Varttika",
        Rule::Dhatupatha(_) => "Dhatupatha",
        Rule::Unadipatha(_) => "Unadipatha",
        Rule::Linganushasana(_) => "Linganushasana",
        Rule::Phit(_) => "Phit",
        Rule::Kashika(_) => "Kashika",
        Rule::Kaumudi(_) => "Kaumudi",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prakriya_core::domain::{
        Dhatu, Gana, Krdanta, Krt, Lakara, Linga, Pratipadika, Prayoga, Purusha, Subanta,
        Taddhita, Taddhitanta, Tinanta, Vacana, Vibhakti,
    };

    fn bhu() -> Dhatu {
        Dhatu::mula("BU", Gana::Bhvadi)
    }

    fn texts(prakriyas: &[Prakriya]) -> Vec<&str> {
        prakriyas.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn derives_bhavati_with_its_history() {
        let spec = Specification::Tinanta(Tinanta {
            dhatu: bhu(),
            prayoga: Prayoga::Kartari,
            lakara: Lakara::Lat,
            purusha: Purusha::Prathama,
            vacana: Vacana::Eka,
            pada: None,
        });
        let prakriyas = VidyutDeriver::new().derive(&spec).unwrap();
        assert_eq!(texts(&prakriyas), ["Bavati"]);

        let history = &prakriyas[0].history;
        assert!(!history.is_empty());
        assert!(history.iter().any(|s| s.source == "Dhatupatha"));
        assert!(history.iter().any(|s| s.source == "Ashtadhyayi" && s.code == "3.4.78"));
        assert_eq!(history.last().map(|s| s.result.concat()).as_deref(), Some("Bavati"));
    }

    #[test]
    fn derives_nominal_and_derived_stems() {
        let deriver = VidyutDeriver::new();

        let nadi = Specification::Subanta(Subanta {
            pratipadika: Pratipadika::nyap("nadI"),
            linga: Linga::Stri,
            vibhakti: Vibhakti::Prathama,
            vacana: Vacana::Dvi,
        });
        assert_eq!(texts(&deriver.derive(&nadi).unwrap()), ["nadyO"]);

        let bhuta = Specification::Krdanta(Krdanta {
            dhatu: bhu(),
            krt: Krt::kta,
        });
        assert_eq!(texts(&deriver.derive(&bhuta).unwrap()), ["BUta"]);

        let aupagava = Specification::Taddhitanta(Taddhitanta {
            pratipadika: Pratipadika::basic("upagu"),
            taddhita: Taddhita::aR,
        });
        assert_eq!(texts(&deriver.derive(&aupagava).unwrap()), ["Opagava"]);
    }

    #[test]
    fn malformed_arguments_fail_the_call() {
        let spec = Specification::Dhatu {
            dhatu: Dhatu::mula("भू", Gana::Bhvadi),
        };
        let err = VidyutDeriver::new().derive(&spec).unwrap_err();
        assert!(err.to_string().contains("Derivation failed for dhatu(भू)"));
        assert!(!err.is_recoverable());
    }
}
