//! `prakriya tinanta`: every finite form of a root.

use tracing::instrument;

use prakriya_core::{
    application::{Enumerator, VerbalOptions},
    domain::Prayoga,
};

use crate::{cli::TinantaArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(root = %args.root))]
pub fn execute(args: TinantaArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = super::require_word(&args.root)?;
    let options = VerbalOptions {
        prayogas: if args.prayoga.is_empty() {
            vec![Prayoga::Kartari]
        } else {
            args.prayoga
        },
        by_pada: args.by_pada,
        sanadi: args.sanadi,
    };
    let dir = args.out.unwrap_or_else(|| config.tinanta_out());

    let wb = crate::workbench::build(&config)?;
    let enumerator = Enumerator::new(&wb);
    let documents = match args.gana {
        Some(gana) => vec![enumerator.tinanta(&super::explicit_root(&wb, root, gana), &options)?],
        None => enumerator.tinanta_for(root, &options)?,
    };
    super::emit_and_report(&wb, &documents, &dir, root, &output)?;
    Ok(())
}
