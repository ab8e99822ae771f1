//! `prakriya derive`: look a word up and trace every entry.

use tracing::instrument;

use prakriya_core::{application::Enumerator, domain::EntryKind};

use crate::{
    cli::{DeriveArgs, EntryKindArg},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(word = %args.word))]
pub fn execute(args: DeriveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let word = super::require_word(&args.word)?;
    let kind = args.kind.map(|k| match k {
        EntryKindArg::Tinanta => EntryKind::Tinanta,
        EntryKindArg::Subanta => EntryKind::Subanta,
    });
    let dir = args.out.unwrap_or_else(|| match kind {
        Some(EntryKind::Tinanta) => config.tinanta_out(),
        Some(EntryKind::Subanta) => config.subanta_out(),
        None => config.output.base_dir.clone(),
    });

    let wb = crate::workbench::build(&config)?;
    let documents = Enumerator::new(&wb).lookup_and_derive(word, kind)?;
    super::emit_and_report(&wb, &documents, &dir, word, &output)?;
    Ok(())
}
