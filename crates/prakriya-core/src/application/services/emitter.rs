//! Document emission: `<dir>/<storage name>.md`.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{application::Workbench, domain::Document, error::PrakriyaResult};

pub struct DocumentEmitter<'a> {
    wb: &'a Workbench,
}

impl<'a> DocumentEmitter<'a> {
    pub fn new(wb: &'a Workbench) -> Self {
        Self { wb }
    }

    /// Where `document` lands under `dir`.
    pub fn path_for(&self, document: &Document, dir: &Path) -> PathBuf {
        let stem = self.wb.sanitizer().storage_name(document.title());
        dir.join(format!("{stem}.md"))
    }

    /// Write `document` under `dir`, creating the directory if needed.
    /// An existing file is overwritten.
    #[instrument(skip(self, document), fields(title = document.title()))]
    pub fn emit(&self, document: &Document, dir: &Path) -> PrakriyaResult<PathBuf> {
        let path = self.path_for(document, dir);
        self.wb.filesystem().create_dir_all(dir)?;
        self.wb.writer().write(&path, document)?;
        info!(path = %path.display(), "Wrote document");
        Ok(path)
    }

    /// Emit every document; returns the written paths in order.
    pub fn emit_all(&self, documents: &[Document], dir: &Path) -> PrakriyaResult<Vec<PathBuf>> {
        documents.iter().map(|d| self.emit(d, dir)).collect()
    }
}
