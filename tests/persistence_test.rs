mod common;

use anyhow::Result;
use billy::Ledger;
use billy::storage::{COIN_COUNTS_KEY, KeyValueStore, MemoryStore};
use common::{open_store, persisted_counts, sqlite_ledger};
use tempfile::TempDir;

#[tokio::test]
async fn test_fresh_database_starts_empty() -> Result<()> {
    let (ledger, _temp) = sqlite_ledger().await?;

    assert!(ledger.counts().is_empty());
    assert!(persisted_counts(ledger.store()).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_writes_are_visible_immediately() -> Result<()> {
    let (mut ledger, _temp) = sqlite_ledger().await?;

    ledger.set_count("TWD", "10", "4").await?;
    let persisted = persisted_counts(ledger.store()).await?.unwrap();
    assert_eq!(persisted["TWD"]["10"], "4");

    ledger.increment_by_ten("TWD", "10").await?;
    let persisted = persisted_counts(ledger.store()).await?.unwrap();
    assert_eq!(persisted["TWD"]["10"], "14");

    ledger.reset_currency("TWD").await?;
    let persisted = persisted_counts(ledger.store()).await?.unwrap();
    assert_eq!(persisted["TWD"]["10"], "0");
    assert_eq!(persisted["TWD"].len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_counts_survive_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;

    {
        let mut ledger = Ledger::load(open_store(&temp_dir).await?).await?;
        ledger.set_count("TWD", "1", "2").await?;
        ledger.set_count("TWD", "5", "1").await?;
        ledger.set_count("TWD", "1000", "3").await?;
        ledger.set_count("CNY", "0.1", "10").await?;
        ledger.set_count("CNY", "100", "1").await?;
    }

    let ledger = Ledger::load(open_store(&temp_dir).await?).await?;
    assert_eq!(ledger.formatted_total("TWD"), "$3,007");
    assert_eq!(ledger.formatted_total("CNY"), "¥1,010");
    assert_eq!(ledger.total("JPY"), 0);
    Ok(())
}

#[tokio::test]
async fn test_record_is_keyed_coin_counts() -> Result<()> {
    let (mut ledger, _temp) = sqlite_ledger().await?;

    ledger.set_count("KRW", "500", "8").await?;

    let raw = ledger.store().get(COIN_COUNTS_KEY).await?.unwrap();
    assert_eq!(raw, r#"{"KRW":{"500":"8"}}"#);
    assert!(ledger.store().updated_at(COIN_COUNTS_KEY).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_malformed_record_degrades_to_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = open_store(&temp_dir).await?;
    store.set(COIN_COUNTS_KEY, r#"{"TWD": {"5": 3}}"#).await?;

    let mut ledger = Ledger::load(store).await?;
    assert!(ledger.counts().is_empty());

    // The next write replaces the bad record
    ledger.set_count("TWD", "5", "3").await?;
    let persisted = persisted_counts(ledger.store()).await?.unwrap();
    assert_eq!(persisted["TWD"]["5"], "3");
    Ok(())
}

#[tokio::test]
async fn test_unrelated_keys_are_untouched() -> Result<()> {
    let (mut ledger, _temp) = sqlite_ledger().await?;

    ledger.store().set("theme", "dark").await?;
    ledger.set_count("HKD", "20", "1").await?;
    ledger.reset_currency("HKD").await?;

    assert_eq!(ledger.store().get("theme").await?.as_deref(), Some("dark"));
    Ok(())
}

#[tokio::test]
async fn test_memory_store_counts_writes() -> Result<()> {
    let store = MemoryStore::new();
    let mut ledger = Ledger::load(store.clone()).await?;

    ledger.set_count("SGD", "5", "1").await?;
    ledger.set_count("SGD", "10", "1").await?;
    ledger.increment_by_ten("SGD", "5").await?;

    assert_eq!(store.write_count(), 3);
    let persisted = persisted_counts(&store).await?.unwrap();
    assert_eq!(persisted["SGD"]["5"], "11");

    let reloaded = Ledger::load(ledger.into_store()).await?;
    assert_eq!(reloaded.total("SGD"), 65);
    Ok(())
}
