use crate::measurement::Measurement;
use crate::store::{SettingsStore, StoreError};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Build a `Measurement` from string literals.
pub fn record(parameter: &str, unit: &str, value: &str) -> Measurement {
    Measurement {
        parameter: parameter.to_string(),
        unit: unit.to_string(),
        value: value.to_string(),
    }
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    documents: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

/// In-memory settings store for unit tests.
///
/// Clones share the same underlying state, so a test can hand one clone to
/// the component and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for persist-failure tests.
    pub fn failing_writes() -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().fail_writes = true;
        store
    }

    /// Seed a document without counting it as a component write.
    pub fn insert(&self, path: &str, contents: &str) {
        self.inner
            .lock()
            .unwrap()
            .documents
            .insert(path.to_string(), contents.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.inner.lock().unwrap().documents.get(path).cloned()
    }

    /// Number of successful writes performed through the trait.
    pub fn write_count(&self) -> usize {
        self.inner.lock().unwrap().writes
    }
}

impl SettingsStore for MemoryStore {
    fn exists(&self, path: &str) -> bool {
        self.inner.lock().unwrap().documents.contains_key(path)
    }

    fn read(&self, path: &str) -> Result<String, StoreError> {
        self.get(path)
            .ok_or_else(|| StoreError::Io(io::Error::new(io::ErrorKind::NotFound, path.to_string())))
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_writes {
            return Err(StoreError::Io(io::Error::other("write rejected")));
        }
        inner.documents.insert(path.to_string(), contents.to_string());
        inner.writes += 1;
        Ok(())
    }
}
