use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::Ledger;
use crate::domain::{CountState, CurrencyCode};

/// Count state snapshot for export/import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub counts: CountState,
}

/// Exporter for writing count state in various formats
pub struct Exporter<'a, S> {
    ledger: &'a Ledger<S>,
}

impl<'a, S> Exporter<'a, S> {
    pub fn new(ledger: &'a Ledger<S>) -> Self {
        Self { ledger }
    }

    /// Export every denomination of every known currency to CSV.
    /// Returns the number of rows written.
    pub fn export_counts_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "currency",
            "flag",
            "denomination",
            "count",
            "value",
            "subtotal",
        ])?;

        let mut count = 0;
        for currency in CurrencyCode::ALL {
            for row in self.ledger.breakdown(currency.as_str()) {
                let (count_str, value, subtotal) = (
                    row.count.to_string(),
                    row.value.to_string(),
                    row.subtotal.to_string(),
                );
                csv_writer.write_record([
                    currency.as_str(),
                    currency.flag(),
                    row.label,
                    count_str.as_str(),
                    value.as_str(),
                    subtotal.as_str(),
                ])?;
                count += 1;
            }
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the raw count state as a JSON snapshot
    pub fn export_snapshot_json<W: Write>(&self, mut writer: W) -> Result<CountSnapshot> {
        let snapshot = CountSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            counts: self.ledger.counts().clone(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
