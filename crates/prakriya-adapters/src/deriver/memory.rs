//! In-memory deriver for testing.

use std::{
    collections::HashMap,
    sync::{
        Arc, RwLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use prakriya_core::{
    application::{ApplicationError, ports::Deriver},
    domain::{Prakriya, Specification},
    error::PrakriyaResult,
};

/// Answers from a table filled by the test; counts every call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeriver {
    results: Arc<RwLock<HashMap<Specification, Vec<Prakriya>>>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, spec: Specification, prakriyas: Vec<Prakriya>) -> PrakriyaResult<()> {
        self.results
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?
            .insert(spec, prakriyas);
        Ok(())
    }

    /// Number of `derive` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Deriver for InMemoryDeriver {
    fn derive(&self, spec: &Specification) -> PrakriyaResult<Vec<Prakriya>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let results = self
            .results
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(results.get(spec).cloned().unwrap_or_default())
    }
}
