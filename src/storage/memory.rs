use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};

use super::KeyValueStore;

/// In-process key/value store. Clones share the same records, so a test can
/// keep a handle and inspect what the ledger wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with an existing record.
    pub fn with_record(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut records) = store.records.lock() {
            records.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Number of `set` calls served so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let records = self
            .records
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(records.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        records.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
