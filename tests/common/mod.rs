// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use billy::storage::{COIN_COUNTS_KEY, KeyValueStore, MemoryStore, SqliteStore};
use billy::{CountState, Ledger};
use tempfile::TempDir;

/// Helper to create a ledger backed by an in-memory store.
/// The returned store shares records with the ledger's.
pub async fn memory_ledger() -> Result<(Ledger<MemoryStore>, MemoryStore)> {
    let store = MemoryStore::new();
    let ledger = Ledger::load(store.clone()).await?;
    Ok((ledger, store))
}

/// Helper to create a ledger with a temporary SQLite database
pub async fn sqlite_ledger() -> Result<(Ledger<SqliteStore>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let ledger = Ledger::load(open_store(&temp_dir).await?).await?;
    Ok((ledger, temp_dir))
}

/// Open (or create) the SQLite store inside a temp dir
pub async fn open_store(temp_dir: &TempDir) -> Result<SqliteStore> {
    let db_path = temp_dir.path().join("test.db");
    SqliteStore::create(db_path.to_str().unwrap()).await
}

/// Decode the persisted count record straight from a store
pub async fn persisted_counts<S: KeyValueStore>(store: &S) -> Result<Option<CountState>> {
    match store.get(COIN_COUNTS_KEY).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}
