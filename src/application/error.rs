use thiserror::Error;

/// Failures surfaced by the ledger. Counting itself never fails; only the
/// backing store can.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Could not encode count state: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
