use anyhow::Result;
use std::io::Read;

use crate::application::Ledger;
use crate::domain::{CountState, digits_only};
use crate::io::export::CountSnapshot;
use crate::storage::KeyValueStore;

/// Result of an import operation
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: usize,
    /// Counts whose text changed when reduced to digits
    pub sanitized: usize,
    pub errors: Vec<ImportError>,
}

/// Error that occurred during import
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

/// Options for import operations
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub dry_run: bool,
}

/// Importer for loading count state into the ledger
pub struct Importer<'a, S> {
    ledger: &'a mut Ledger<S>,
}

impl<'a, S: KeyValueStore> Importer<'a, S> {
    pub fn new(ledger: &'a mut Ledger<S>) -> Self {
        Self { ledger }
    }

    /// Replace the whole count state with a JSON snapshot.
    pub async fn import_snapshot_json<R: Read>(
        &mut self,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportResult> {
        let snapshot: CountSnapshot = serde_json::from_reader(reader)?;

        let mut result = ImportResult::default();
        for denoms in snapshot.counts.values() {
            for raw in denoms.values() {
                result.imported += 1;
                if digits_only(raw) != *raw {
                    result.sanitized += 1;
                }
            }
        }

        if !options.dry_run {
            self.ledger.restore(snapshot.counts).await?;
        }
        Ok(result)
    }

    /// Merge counts from CSV in the layout `export_counts_csv` writes.
    /// Only the `currency`, `denomination` and `count` columns are read.
    pub async fn import_counts_csv<R: Read>(
        &mut self,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportResult> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let (Some(currency_col), Some(denom_col), Some(count_col)) =
            (column("currency"), column("denomination"), column("count"))
        else {
            anyhow::bail!("CSV header must contain currency, denomination and count columns");
        };

        let mut merged: CountState = self.ledger.counts().clone();
        let mut result = ImportResult::default();

        for (line_num, record) in csv_reader.records().enumerate() {
            let line = line_num + 2; // +2 for header and 0-indexing

            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    result.errors.push(ImportError {
                        line,
                        field: None,
                        error: format!("CSV parse error: {}", e),
                    });
                    continue;
                }
            };

            let currency = record.get(currency_col).unwrap_or("");
            let denom = record.get(denom_col).unwrap_or("");
            let raw = record.get(count_col).unwrap_or("");

            if currency.is_empty() {
                result.errors.push(ImportError {
                    line,
                    field: Some("currency".to_string()),
                    error: "Missing currency".to_string(),
                });
                continue;
            }
            if denom.is_empty() {
                result.errors.push(ImportError {
                    line,
                    field: Some("denomination".to_string()),
                    error: "Missing denomination".to_string(),
                });
                continue;
            }

            let count = digits_only(raw);
            if count != raw {
                result.sanitized += 1;
            }
            merged
                .entry(currency.to_string())
                .or_default()
                .insert(denom.to_string(), count);
            result.imported += 1;
        }

        if !options.dry_run && result.imported > 0 {
            self.ledger.restore(merged).await?;
        }
        Ok(result)
    }
}
