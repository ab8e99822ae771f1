//! The explicit context every service works against.
//!
//! A [`Workbench`] is assembled once at process start from adapters and
//! borrowed by every service until the process ends. The sūtra table is
//! loaded into it once and never reloaded.

use std::sync::Arc;

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        ports::{Deriver, DocumentWriter, Filesystem, Lexicon, NameSanitizer, Transliterator},
    },
    domain::{Prakriya, Specification, SutraTable},
    error::{PrakriyaError, PrakriyaResult},
};

/// Adapters and read-only tables shared by all services.
pub struct Workbench {
    lexicon: Box<dyn Lexicon>,
    deriver: Box<dyn Deriver>,
    lipi: Box<dyn Transliterator>,
    sanitizer: Box<dyn NameSanitizer>,
    filesystem: Arc<dyn Filesystem>,
    writer: Box<dyn DocumentWriter>,
    sutras: SutraTable,
}

impl Workbench {
    pub fn builder() -> WorkbenchBuilder {
        WorkbenchBuilder::default()
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    pub fn sutras(&self) -> &SutraTable {
        &self.sutras
    }

    pub fn sanitizer(&self) -> &dyn NameSanitizer {
        self.sanitizer.as_ref()
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    pub fn writer(&self) -> &dyn DocumentWriter {
        self.writer.as_ref()
    }

    /// SLP1 → display script.
    pub fn display(&self, internal: &str) -> String {
        self.lipi.to_display(internal)
    }

    /// Display script → SLP1.
    pub fn internal(&self, display: &str) -> String {
        self.lipi.to_internal(display)
    }

    /// Lexicon key for a user-supplied form. ASCII input is taken to be
    /// SLP1 already.
    pub fn lookup_key(&self, surface: &str) -> String {
        if surface.is_ascii() {
            surface.to_string()
        } else {
            self.internal(surface)
        }
    }

    /// Invoke the derivation engine. No retry, no caching.
    pub fn derive(&self, spec: &Specification) -> PrakriyaResult<Vec<Prakriya>> {
        spec.validate().map_err(PrakriyaError::Domain)?;
        let prakriyas = self.deriver.derive(spec)?;
        debug!(%spec, results = prakriyas.len(), "Derived");
        Ok(prakriyas)
    }
}

/// Builder for [`Workbench`]; every adapter except the sūtra table is required.
#[derive(Default)]
pub struct WorkbenchBuilder {
    lexicon: Option<Box<dyn Lexicon>>,
    deriver: Option<Box<dyn Deriver>>,
    lipi: Option<Box<dyn Transliterator>>,
    sanitizer: Option<Box<dyn NameSanitizer>>,
    filesystem: Option<Arc<dyn Filesystem>>,
    writer: Option<Box<dyn DocumentWriter>>,
    sutras: SutraTable,
}

impl WorkbenchBuilder {
    pub fn lexicon(mut self, lexicon: impl Lexicon + 'static) -> Self {
        self.lexicon = Some(Box::new(lexicon));
        self
    }

    pub fn deriver(mut self, deriver: impl Deriver + 'static) -> Self {
        self.deriver = Some(Box::new(deriver));
        self
    }

    pub fn transliterator(mut self, lipi: impl Transliterator + 'static) -> Self {
        self.lipi = Some(Box::new(lipi));
        self
    }

    pub fn sanitizer(mut self, sanitizer: impl NameSanitizer + 'static) -> Self {
        self.sanitizer = Some(Box::new(sanitizer));
        self
    }

    pub fn filesystem(mut self, filesystem: Arc<dyn Filesystem>) -> Self {
        self.filesystem = Some(filesystem);
        self
    }

    pub fn writer(mut self, writer: impl DocumentWriter + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    pub fn sutras(mut self, sutras: SutraTable) -> Self {
        self.sutras = sutras;
        self
    }

    pub fn build(self) -> PrakriyaResult<Workbench> {
        Ok(Workbench {
            lexicon: self.lexicon.ok_or(missing("lexicon"))?,
            deriver: self.deriver.ok_or(missing("deriver"))?,
            lipi: self.lipi.ok_or(missing("transliterator"))?,
            sanitizer: self.sanitizer.ok_or(missing("sanitizer"))?,
            filesystem: self.filesystem.ok_or(missing("filesystem"))?,
            writer: self.writer.ok_or(missing("document writer"))?,
            sutras: self.sutras,
        })
    }
}

fn missing(name: &'static str) -> PrakriyaError {
    ApplicationError::AdapterNotConfigured { name }.into()
}
