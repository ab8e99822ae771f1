//! `prakriya subanta`: every declined form of a stem.

use tracing::instrument;

use prakriya_core::{
    application::{Enumerator, NominalAxes, SubantaMode},
    domain::{Linga, Vacana, Vibhakti},
};

use crate::{
    cli::{ModeArg, SubantaArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(stem = %args.stem))]
pub fn execute(args: SubantaArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let stem = super::require_word(&args.stem)?;
    let mode = match args.mode {
        ModeArg::Basic => SubantaMode::Basic,
        ModeArg::Nyap => SubantaMode::Nyap,
        ModeArg::Kvip => SubantaMode::Kvip,
    };
    let axes = NominalAxes {
        lingas: or_all(args.linga, Linga::ALL),
        vibhaktis: or_all(args.vibhakti, Vibhakti::ALL),
        vacanas: or_all(args.vacana, Vacana::ALL),
    };
    let dir = args.out.unwrap_or_else(|| config.subanta_out());

    let wb = crate::workbench::build(&config)?;
    let documents = Enumerator::new(&wb).subanta_mode(stem, mode, &axes)?;
    super::emit_and_report(&wb, &documents, &dir, stem, &output)?;
    Ok(())
}

/// An empty restriction means the whole axis.
fn or_all<T: Copy>(chosen: Vec<T>, all: &[T]) -> Vec<T> {
    if chosen.is_empty() { all.to_vec() } else { chosen }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_axis_means_every_value() {
        assert_eq!(or_all(Vec::new(), Vacana::ALL), Vacana::ALL);
        assert_eq!(or_all(vec![Linga::Stri], Linga::ALL), [Linga::Stri]);
    }
}
