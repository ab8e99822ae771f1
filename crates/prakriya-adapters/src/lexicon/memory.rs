//! In-memory lexicon for testing.

use std::{
    collections::HashMap,
    sync::{
        Arc, RwLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use prakriya_core::{
    application::{ApplicationError, ports::Lexicon},
    domain::{DhatuEntry, LexicalEntry, PratipadikaEntry},
    error::PrakriyaResult,
};

/// Thread-safe in-memory lexicon that counts lookups.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLexicon {
    inner: Arc<RwLock<Inner>>,
    lookups: Arc<AtomicUsize>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Vec<LexicalEntry>>,
    dhatus: Vec<DhatuEntry>,
    pratipadikas: Vec<PratipadikaEntry>,
}

impl InMemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry under the SLP1 surface form `key`.
    pub fn insert(&self, key: impl Into<String>, entry: LexicalEntry) -> PrakriyaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.entries.entry(key.into()).or_default().push(entry);
        Ok(())
    }

    pub fn add_dhatu(&self, entry: DhatuEntry) -> PrakriyaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.dhatus.push(entry);
        Ok(())
    }

    pub fn add_pratipadika(&self, entry: PratipadikaEntry) -> PrakriyaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.pratipadikas.push(entry);
        Ok(())
    }

    /// Number of `get` calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl Lexicon for InMemoryLexicon {
    fn get(&self, key: &str) -> PrakriyaResult<Vec<LexicalEntry>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.entries.get(key).cloned().unwrap_or_default())
    }

    fn dhatus(&self) -> PrakriyaResult<Vec<DhatuEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.dhatus.clone())
    }

    fn pratipadikas(&self) -> PrakriyaResult<Vec<PratipadikaEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.pratipadikas.clone())
    }
}
