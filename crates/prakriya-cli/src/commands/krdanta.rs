//! `prakriya krdanta`: every kṛt derivative of a root.

use tracing::instrument;

use prakriya_core::application::Enumerator;

use crate::{cli::KrdantaArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(root = %args.root))]
pub fn execute(args: KrdantaArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = super::require_word(&args.root)?;
    let dir = args.out.unwrap_or_else(|| config.krdanta_out());

    let wb = crate::workbench::build(&config)?;
    let enumerator = Enumerator::new(&wb);
    let documents = match args.gana {
        Some(gana) => {
            let dhatu = super::explicit_root(&wb, root, gana).with_sanadi(&args.sanadi);
            vec![enumerator.krdanta(&dhatu)?]
        }
        None => enumerator.krdanta_for(root, &args.sanadi)?,
    };
    super::emit_and_report(&wb, &documents, &dir, root, &output)?;
    Ok(())
}
