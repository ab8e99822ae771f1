//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and report results. No
//! grammar lives here.

pub mod completions;
pub mod config;
pub mod derive;
pub mod dict;
pub mod krdanta;
pub mod subanta;
pub mod tinanta;

use std::path::{Path, PathBuf};

use prakriya_core::{
    application::{DocumentEmitter, Workbench},
    domain::{Dhatu, Document, Gana},
};

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Reject blank words before any data is loaded.
pub(crate) fn require_word(word: &str) -> CliResult<&str> {
    let word = word.trim();
    if word.is_empty() {
        return Err(CliError::InvalidInput {
            message: "the word to derive is empty".into(),
            source: None,
        });
    }
    Ok(word)
}

/// A root given on the command line with its gaṇa.
pub(crate) fn explicit_root(wb: &Workbench, root: &str, gana: Gana) -> Dhatu {
    Dhatu::mula(wb.lookup_key(root), gana)
}

/// Write every document under `dir` and list the written files.
///
/// An empty run is an error so scripts can tell it apart from success.
pub(crate) fn emit_and_report(
    wb: &Workbench,
    documents: &[Document],
    dir: &Path,
    word: &str,
    output: &OutputManager,
) -> CliResult<Vec<PathBuf>> {
    let documents: Vec<&Document> = documents.iter().filter(|d| !d.content().is_empty()).collect();
    if documents.is_empty() {
        return Err(CliError::NothingDerived {
            word: word.to_string(),
        });
    }

    let emitter = DocumentEmitter::new(wb);
    let mut written = Vec::with_capacity(documents.len());
    for document in documents {
        let path = emitter.emit(document, dir)?;
        output.success(&format!("{} → {}", document.title(), path.display()))?;
        written.push(path);
    }
    Ok(written)
}
