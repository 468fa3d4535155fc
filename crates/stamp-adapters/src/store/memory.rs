//! In-memory template store for tests and embedding callers.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use stamp_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::BundleEntry,
    error::StampResult,
};

/// Thread-safe in-memory template store, enumerated in name order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<String, BundleEntry>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given `(name, body)` files.
    pub fn with_templates<'a>(templates: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (name, body) in templates {
            store.insert(BundleEntry::file(name, body));
        }
        store
    }

    /// Insert or replace an entry.
    pub fn insert(&self, entry: BundleEntry) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(entry.name().to_owned(), entry);
        }
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn describe(&self) -> String {
        "in-memory templates".into()
    }

    fn entries(&self) -> StampResult<Vec<BundleEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.values().cloned().collect())
    }
}
