//! Assembles the [`Workbench`] from configured data files.

use std::sync::Arc;

use tracing::{info, instrument, warn};

#[cfg(feature = "engine")]
use prakriya_adapters::{KoshaLexicon, VidyutDeriver};
use prakriya_adapters::{
    ItransStorageName, JsonLexicon, LocalFilesystem, MarkdownWriter, Slp1Devanagari,
    SnapshotDeriver, load_sutras,
};
use prakriya_core::{
    application::{Workbench, WorkbenchBuilder, ports::Filesystem},
    domain::SutraTable,
};

use crate::{
    config::{AppConfig, DataConfig, Engine},
    error::CliResult,
};

/// Load the sūtra table and the configured engine, and wire the production
/// adapters around them.
#[instrument(skip_all, fields(engine = config.data.engine.as_str()))]
pub fn build(config: &AppConfig) -> CliResult<Workbench> {
    let sutras = match &config.data.sutras {
        Some(path) => load_sutras(path)?,
        None => {
            warn!("No sutra table configured; rule texts will show as (??)");
            SutraTable::new()
        }
    };
    info!(sutras = sutras.len(), "Sutras loaded");

    let fs: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let builder = Workbench::builder()
        .transliterator(Slp1Devanagari::new())
        .sanitizer(ItransStorageName::new())
        .filesystem(fs.clone())
        .writer(MarkdownWriter::new(fs))
        .sutras(sutras);

    let workbench = match config.data.engine {
        Engine::Vidyut => with_vidyut(builder, &config.data)?,
        Engine::Snapshot => with_snapshot(builder, &config.data)?,
    }
    .build()?;

    Ok(workbench)
}

#[cfg(feature = "engine")]
fn with_vidyut(builder: WorkbenchBuilder, data: &DataConfig) -> CliResult<WorkbenchBuilder> {
    if data.dhatupatha.is_none() {
        warn!("No dhatupatha configured; root entries will carry no meaning");
    }
    let lexicon = KoshaLexicon::open(&data.kosha, data.dhatupatha.as_deref())?;
    info!(kosha = %data.kosha.display(), "Kosha opened");
    Ok(builder.lexicon(lexicon).deriver(VidyutDeriver::new()))
}

#[cfg(not(feature = "engine"))]
fn with_vidyut(_: WorkbenchBuilder, _: &DataConfig) -> CliResult<WorkbenchBuilder> {
    Err(crate::error::CliError::ConfigError {
        message: "data.engine = \"vidyut\" needs a build with the `engine` feature; \
                  set data.engine = \"snapshot\""
            .to_string(),
        source: None,
    })
}

fn with_snapshot(builder: WorkbenchBuilder, data: &DataConfig) -> CliResult<WorkbenchBuilder> {
    let lexicon = JsonLexicon::load(&data.lexicon)?;
    let deriver = SnapshotDeriver::load(&data.derivations)?;
    info!(
        forms = lexicon.len(),
        derivations = deriver.len(),
        "Snapshot loaded"
    );
    Ok(builder.lexicon(lexicon).deriver(deriver))
}
