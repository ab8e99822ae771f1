//! Mapping between the domain's grammatical arguments and
//! `vidyut_prakriya::args`.
//!
//! Small closed categories map by explicit `match`. Kṛt and taddhita
//! suffixes share their SLP1 names with the engine, so they go through
//! `FromStr` on `as_str`.
//!
//! A nāma-dhātu keeps its sanādi list flat in the domain: the first suffix is
//! the one that turns the stem into a root, the rest follow it.

use std::str::FromStr;

use vidyut_prakriya::args as vp;

use prakriya_core::domain::{
    Dhatu, DhatuPada, Gana, Krdanta, Krt, Lakara, Linga, Pratipadika, Prayoga, Purusha, Sanadi,
    Specification, Subanta, Taddhita, Taddhitanta, Tinanta, Vacana, Vibhakti,
};

/// Why a domain value has no engine counterpart.
pub(crate) type Reason = String;

/// One engine call, built from a [`Specification`].
#[derive(Debug)]
pub(crate) enum EngineArgs {
    Tinanta(vp::Tinanta),
    Subanta(vp::Subanta),
    Krdanta(vp::Krdanta),
    Taddhitanta(vp::Taddhitanta),
    Dhatu(vp::Dhatu),
}

impl EngineArgs {
    pub(crate) fn from_spec(spec: &Specification) -> Result<Self, Reason> {
        Ok(match spec {
            Specification::Tinanta(t) => Self::Tinanta(tinanta(t)?),
            Specification::Subanta(s) => Self::Subanta(subanta(s)?),
            Specification::Krdanta(k) => Self::Krdanta(krdanta(k)?),
            Specification::Taddhitanta(t) => Self::Taddhitanta(taddhitanta(t)?),
            Specification::Dhatu { dhatu: d } => Self::Dhatu(dhatu(d)?),
        })
    }
}

// ── Domain → engine ──────────────────────────────────────────────────────────

fn slp1(text: &str) -> Result<vp::Slp1String, Reason> {
    vp::Slp1String::from(text).map_err(|e| format!("'{text}' is not SLP1: {e}"))
}

pub(crate) fn dhatu(value: &Dhatu) -> Result<vp::Dhatu, Reason> {
    match value {
        Dhatu::Mula {
            aupadeshika,
            gana: g,
            antargana,
            prefixes,
            sanadi: s,
        } => {
            slp1(aupadeshika)?;
            let mut builder = vp::Dhatu::builder()
                .aupadeshika(aupadeshika)
                .gana(gana(*g))
                .prefixes(prefixes.as_slice())
                .sanadi(&sanadi_list(s));
            if let Some(name) = antargana {
                let antargana = vp::Antargana::from_str(name)
                    .map_err(|_| format!("unknown antargana '{name}'"))?;
                builder = builder.antargana(antargana);
            }
            builder.build().map_err(|e| e.to_string())
        }
        Dhatu::Nama {
            pratipadika: stem,
            sanadi: s,
        } => {
            let (first, rest) = match s.split_first() {
                Some((first, rest)) => (Some(sanadi(*first)), rest),
                None => (None, &s[..]),
            };
            Ok(vp::Dhatu::nama(pratipadika(stem)?, first).with_sanadi(&sanadi_list(rest)))
        }
    }
}

pub(crate) fn pratipadika(value: &Pratipadika) -> Result<vp::Pratipadika, Reason> {
    Ok(match value {
        Pratipadika::Basic { text } => vp::Pratipadika::basic(slp1(text)?),
        Pratipadika::Nyap { text } => vp::Pratipadika::nyap(slp1(text)?),
        Pratipadika::Krdanta { dhatu: d, krt: k } => {
            vp::Krdanta::new(dhatu(d)?, base_krt(*k)?).into()
        }
    })
}

fn tinanta(value: &Tinanta) -> Result<vp::Tinanta, Reason> {
    let mut builder = vp::Tinanta::builder()
        .dhatu(dhatu(&value.dhatu)?)
        .prayoga(prayoga(value.prayoga))
        .lakara(lakara(value.lakara))
        .purusha(purusha(value.purusha))
        .vacana(vacana(value.vacana));
    if let Some(p) = value.pada {
        builder = builder.pada(pada(p));
    }
    builder.build().map_err(|e| e.to_string())
}

fn subanta(value: &Subanta) -> Result<vp::Subanta, Reason> {
    Ok(vp::Subanta::new(
        pratipadika(&value.pratipadika)?,
        linga(value.linga),
        vibhakti(value.vibhakti),
        vacana(value.vacana),
    ))
}

fn krdanta(value: &Krdanta) -> Result<vp::Krdanta, Reason> {
    Ok(vp::Krdanta::new(dhatu(&value.dhatu)?, base_krt(value.krt)?))
}

fn taddhitanta(value: &Taddhitanta) -> Result<vp::Taddhitanta, Reason> {
    let taddhita = vp::Taddhita::from_str(value.taddhita.as_str())
        .map_err(|_| format!("unknown taddhita '{}'", value.taddhita))?;
    Ok(vp::Taddhitanta::new(pratipadika(&value.pratipadika)?, taddhita))
}

fn base_krt(value: Krt) -> Result<vp::BaseKrt, Reason> {
    vp::BaseKrt::from_str(value.as_str()).map_err(|_| format!("unknown krt '{value}'"))
}

fn sanadi_list(values: &[Sanadi]) -> Vec<vp::Sanadi> {
    values.iter().copied().map(sanadi).collect()
}

pub(crate) fn gana(value: Gana) -> vp::Gana {
    match value {
        Gana::Bhvadi => vp::Gana::Bhvadi,
        Gana::Adadi => vp::Gana::Adadi,
        Gana::Juhotyadi => vp::Gana::Juhotyadi,
        Gana::Divadi => vp::Gana::Divadi,
        Gana::Svadi => vp::Gana::Svadi,
        Gana::Tudadi => vp::Gana::Tudadi,
        Gana::Rudhadi => vp::Gana::Rudhadi,
        Gana::Tanadi => vp::Gana::Tanadi,
        Gana::Kryadi => vp::Gana::Kryadi,
        Gana::Curadi => vp::Gana::Curadi,
        Gana::Kandvadi => vp::Gana::Kandvadi,
    }
}

pub(crate) fn sanadi(value: Sanadi) -> vp::Sanadi {
    match value {
        Sanadi::San => vp::Sanadi::san,
        Sanadi::Yan => vp::Sanadi::yaN,
        Sanadi::YanLuk => vp::Sanadi::yaNluk,
        Sanadi::Nic => vp::Sanadi::Ric,
        Sanadi::Kyac => vp::Sanadi::kyac,
        Sanadi::Kyan => vp::Sanadi::kyaN,
        Sanadi::Kamyac => vp::Sanadi::kAmyac,
    }
}

fn prayoga(value: Prayoga) -> vp::Prayoga {
    match value {
        Prayoga::Kartari => vp::Prayoga::Kartari,
        Prayoga::Karmani => vp::Prayoga::Karmani,
        Prayoga::Bhave => vp::Prayoga::Bhave,
    }
}

fn lakara(value: Lakara) -> vp::Lakara {
    match value {
        Lakara::Lat => vp::Lakara::Lat,
        Lakara::Lit => vp::Lakara::Lit,
        Lakara::Lut => vp::Lakara::Lut,
        Lakara::Lrt => vp::Lakara::Lrt,
        Lakara::Let => vp::Lakara::Let,
        Lakara::Lot => vp::Lakara::Lot,
        Lakara::Lan => vp::Lakara::Lan,
        Lakara::VidhiLin => vp::Lakara::VidhiLin,
        Lakara::AshirLin => vp::Lakara::AshirLin,
        Lakara::Lun => vp::Lakara::Lun,
        Lakara::Lrn => vp::Lakara::Lrn,
    }
}

fn purusha(value: Purusha) -> vp::Purusha {
    match value {
        Purusha::Prathama => vp::Purusha::Prathama,
        Purusha::Madhyama => vp::Purusha::Madhyama,
        Purusha::Uttama => vp::Purusha::Uttama,
    }
}

fn vacana(value: Vacana) -> vp::Vacana {
    match value {
        Vacana::Eka => vp::Vacana::Eka,
        Vacana::Dvi => vp::Vacana::Dvi,
        Vacana::Bahu => vp::Vacana::Bahu,
    }
}

fn pada(value: DhatuPada) -> vp::DhatuPada {
    match value {
        DhatuPada::Parasmaipada => vp::DhatuPada::Parasmai,
        DhatuPada::Atmanepada => vp::DhatuPada::Atmane,
    }
}

fn linga(value: Linga) -> vp::Linga {
    match value {
        Linga::Pum => vp::Linga::Pum,
        Linga::Stri => vp::Linga::Stri,
        Linga::Napumsaka => vp::Linga::Napumsaka,
    }
}

fn vibhakti(value: Vibhakti) -> vp::Vibhakti {
    match value {
        Vibhakti::Prathama => vp::Vibhakti::Prathama,
        Vibhakti::Dvitiya => vp::Vibhakti::Dvitiya,
        Vibhakti::Trtiya => vp::Vibhakti::Trtiya,
        Vibhakti::Caturthi => vp::Vibhakti::Caturthi,
        Vibhakti::Panchami => vp::Vibhakti::Panchami,
        Vibhakti::Sasthi => vp::Vibhakti::Sasthi,
        Vibhakti::Saptami => vp::Vibhakti::Saptami,
        Vibhakti::Sambodhana => vp::Vibhakti::Sambodhana,
    }
}

// ── Engine → domain ──────────────────────────────────────────────────────────

pub(crate) fn from_gana(value: vp::Gana) -> Gana {
    match value {
        vp::Gana::Bhvadi => Gana::Bhvadi,
        vp::Gana::Adadi => Gana::Adadi,
        vp::Gana::Juhotyadi => Gana::Juhotyadi,
        vp::Gana::Divadi => Gana::Divadi,
        vp::Gana::Svadi => Gana::Svadi,
        vp::Gana::Tudadi => Gana::Tudadi,
        vp::Gana::Rudhadi => Gana::Rudhadi,
        vp::Gana::Tanadi => Gana::Tanadi,
        vp::Gana::Kryadi => Gana::Kryadi,
        vp::Gana::Curadi => Gana::Curadi,
        vp::Gana::Kandvadi => Gana::Kandvadi,
    }
}

pub(crate) fn from_sanadi(value: vp::Sanadi) -> Sanadi {
    match value {
        vp::Sanadi::san => Sanadi::San,
        vp::Sanadi::yaN => Sanadi::Yan,
        vp::Sanadi::yaNluk => Sanadi::YanLuk,
        vp::Sanadi::Ric => Sanadi::Nic,
        vp::Sanadi::kyac => Sanadi::Kyac,
        vp::Sanadi::kyaN => Sanadi::Kyan,
        vp::Sanadi::kAmyac => Sanadi::Kamyac,
    }
}

pub(crate) fn from_prayoga(value: vp::Prayoga) -> Prayoga {
    match value {
        vp::Prayoga::Kartari => Prayoga::Kartari,
        vp::Prayoga::Karmani => Prayoga::Karmani,
        vp::Prayoga::Bhave => Prayoga::Bhave,
    }
}

pub(crate) fn from_lakara(value: vp::Lakara) -> Lakara {
    match value {
        vp::Lakara::Lat => Lakara::Lat,
        vp::Lakara::Lit => Lakara::Lit,
        vp::Lakara::Lut => Lakara::Lut,
        vp::Lakara::Lrt => Lakara::Lrt,
        vp::Lakara::Let => Lakara::Let,
        vp::Lakara::Lot => Lakara::Lot,
        vp::Lakara::Lan => Lakara::Lan,
        vp::Lakara::VidhiLin => Lakara::VidhiLin,
        vp::Lakara::AshirLin => Lakara::AshirLin,
        vp::Lakara::Lun => Lakara::Lun,
        vp::Lakara::Lrn => Lakara::Lrn,
    }
}

pub(crate) fn from_purusha(value: vp::Purusha) -> Purusha {
    match value {
        vp::Purusha::Prathama => Purusha::Prathama,
        vp::Purusha::Madhyama => Purusha::Madhyama,
        vp::Purusha::Uttama => Purusha::Uttama,
    }
}

pub(crate) fn from_vacana(value: vp::Vacana) -> Vacana {
    match value {
        vp::Vacana::Eka => Vacana::Eka,
        vp::Vacana::Dvi => Vacana::Dvi,
        vp::Vacana::Bahu => Vacana::Bahu,
    }
}

pub(crate) fn from_linga(value: vp::Linga) -> Linga {
    match value {
        vp::Linga::Pum => Linga::Pum,
        vp::Linga::Stri => Linga::Stri,
        vp::Linga::Napumsaka => Linga::Napumsaka,
    }
}

pub(crate) fn from_vibhakti(value: vp::Vibhakti) -> Vibhakti {
    match value {
        vp::Vibhakti::Prathama => Vibhakti::Prathama,
        vp::Vibhakti::Dvitiya => Vibhakti::Dvitiya,
        vp::Vibhakti::Trtiya => Vibhakti::Trtiya,
        vp::Vibhakti::Caturthi => Vibhakti::Caturthi,
        vp::Vibhakti::Panchami => Vibhakti::Panchami,
        vp::Vibhakti::Sasthi => Vibhakti::Sasthi,
        vp::Vibhakti::Saptami => Vibhakti::Saptami,
        vp::Vibhakti::Sambodhana => Vibhakti::Sambodhana,
    }
}

/// The domain root for an engine root. `None` for shapes the domain does
/// not model (a nāma-dhātu on a taddhitānta or samāsa stem).
pub(crate) fn from_dhatu(value: &vp::Dhatu) -> Option<Dhatu> {
    let sanadi: Vec<Sanadi> = value.sanadi().iter().copied().map(from_sanadi).collect();
    match value {
        vp::Dhatu::Mula(m) => {
            let mut out = Dhatu::mula(m.aupadeshika(), from_gana(m.gana()))
                .with_prefixes(m.prefixes().iter().cloned());
            if let Some(antargana) = m.antargana() {
                out = out.with_antargana(antargana.as_str());
            }
            Some(out.with_sanadi(&sanadi))
        }
        vp::Dhatu::Nama(n) => {
            let stem = from_pratipadika(n.pratipadika())?;
            let first = n.nama_sanadi().map(from_sanadi);
            Some(Dhatu::nama(stem, first).with_sanadi(&sanadi))
        }
    }
}

/// The domain stem for an engine stem, under the same limits as
/// [`from_dhatu`].
pub(crate) fn from_pratipadika(value: &vp::Pratipadika) -> Option<Pratipadika> {
    match value {
        vp::Pratipadika::Basic(basic) => Some(from_basic(basic)),
        vp::Pratipadika::Krdanta(k) => {
            let vp::Krt::Base(base) = k.krt() else {
                return None;
            };
            let krt = Krt::from_str(base.as_str()).ok()?;
            Some(Pratipadika::krdanta(from_dhatu(k.dhatu())?, krt))
        }
        _ => None,
    }
}

pub(crate) fn from_basic(value: &vp::BasicPratipadika) -> Pratipadika {
    if is_nyap(value) {
        Pratipadika::nyap(value.text())
    } else {
        Pratipadika::basic(value.text())
    }
}

/// `BasicPratipadika` exposes its ṅyāp flag only through serde.
fn is_nyap(value: &vp::BasicPratipadika) -> bool {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.get("is_nyap")?.as_bool())
        .unwrap_or(false)
}
