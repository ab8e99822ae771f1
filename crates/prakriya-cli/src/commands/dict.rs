//! `prakriya dict`: Babylon form-table dictionaries.

use tracing::instrument;

use prakriya_core::application::DictionaryService;

use crate::{
    cli::{DictArgs, DictFamily},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    progress::TerminalProgress,
};

#[instrument(skip_all, fields(family = ?args.family))]
pub fn execute(args: DictArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| config.dictionary_out().to_path_buf());

    let wb = crate::workbench::build(&config)?;
    let progress = TerminalProgress::new(output.shows_progress());
    let service = DictionaryService::new(&wb, &progress);

    let written = match args.family {
        DictFamily::Tinanta => service.dump_tinanta(&dest, args.overwrite)?,
        DictFamily::Krdanta => service.dump_krdanta(&dest, args.overwrite)?,
        DictFamily::Subanta => service.dump_subanta(&dest, args.overwrite)?,
        DictFamily::Taddhitanta => service.dump_taddhitanta(&dest, args.overwrite)?,
    };

    if written.is_empty() {
        output.warning("Every dictionary already exists; pass --overwrite to rebuild")?;
    }
    for path in &written {
        output.success(&path.display().to_string())?;
    }
    Ok(())
}
