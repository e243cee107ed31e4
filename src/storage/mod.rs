mod memory;
mod sqlite;

use anyhow::Result;

pub use memory::*;
pub use sqlite::*;

/// SQL migration for the key/value table
pub const MIGRATION_001_INITIAL: &str = include_str!("migrations/001_initial.sql");

/// Key under which the full count state is persisted.
pub const COIN_COUNTS_KEY: &str = "coinCounts";

/// A key/value storage capability holding string records.
///
/// The ledger is the only writer. `set` must have completed the write by the
/// time it returns, since callers rely on write-through persistence.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Read a record, `None` if it was never written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace a record in full.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
