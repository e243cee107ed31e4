use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::application::Ledger;
use crate::domain::{CurrencyCode, denominations_for, flag_for, format_grouped, symbol_for};
use crate::storage::SqliteStore;

/// Billy the Counter - count your coins and bills
#[derive(Parser)]
#[command(name = "billy")]
#[command(about = "Count coins and bills of a currency and see the total")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, env = "BILLY_DB", default_value = "billy.db")]
    pub database: String,

    /// Currency to count (TWD, JPY, KRW, CNY, HKD, SGD)
    #[arg(short, long, global = true, env = "BILLY_CURRENCY", default_value = "TWD")]
    pub currency: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// List supported currencies with their current totals
    Currencies,

    /// Show every denomination of the selected currency with its count
    Show,

    /// Set the count for a denomination (non-digits are dropped, max 6 digits)
    Set {
        /// Denomination label (e.g., "50" or "0.5")
        denomination: String,

        /// Number of coins or bills
        count: String,
    },

    /// Add ten to the count for a denomination
    AddTen {
        /// Denomination label (e.g., "50" or "0.5")
        denomination: String,
    },

    /// Reset every count of the selected currency to zero
    Reset,

    /// Print the formatted total of the selected currency
    Total,

    /// Export counts to CSV or JSON
    Export {
        /// Format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import counts from CSV or a JSON snapshot
    Import {
        /// Input file
        input: String,

        /// Format: csv, json (default: from file extension)
        #[arg(short, long)]
        format: Option<String>,

        /// Validate without writing
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// Log filter used when RUST_LOG is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "billy=debug" } else { "warn" }
    }

    pub async fn run(self) -> Result<()> {
        let currency = self.currency.to_uppercase();
        if CurrencyCode::from_str(&currency).is_none() {
            warn!(currency = %currency, "unknown currency, it has no denominations");
        }

        let database = self.database.as_str();
        match self.command {
            Commands::Init => {
                SqliteStore::create(database).await?;
                println!("Database initialized: {}", database);
            }

            Commands::Currencies => {
                let ledger = open_ledger(database).await?;
                run_currencies_command(&ledger);
            }

            Commands::Show => {
                let ledger = open_ledger(database).await?;
                run_show_command(&ledger, &currency);
            }

            Commands::Set {
                denomination,
                count,
            } => {
                let mut ledger = open_ledger(database).await?;
                warn_unknown_denomination(&currency, &denomination);
                let stored = ledger.set_count(&currency, &denomination, &count).await?;
                println!(
                    "{}{}: {}",
                    symbol_for(&currency),
                    denomination,
                    if stored.is_empty() { "0" } else { stored.as_str() }
                );
                println!("Total {}", ledger.formatted_total(&currency));
            }

            Commands::AddTen { denomination } => {
                let mut ledger = open_ledger(database).await?;
                warn_unknown_denomination(&currency, &denomination);
                let over_limit = ledger.increment_by_ten(&currency, &denomination).await?;
                println!(
                    "{}{}: {}",
                    symbol_for(&currency),
                    denomination,
                    ledger.count(&currency, &denomination)
                );
                println!("Total {}", ledger.formatted_total(&currency));
                if over_limit {
                    println!();
                    println!("Wow! 💰 You are richer than I thought!");
                }
            }

            Commands::Reset => {
                let mut ledger = open_ledger(database).await?;
                ledger.reset_currency(&currency).await?;
                println!("Reset {} counts", currency);
            }

            Commands::Total => {
                let ledger = open_ledger(database).await?;
                println!("{}", ledger.formatted_total(&currency));
            }

            Commands::Export { format, output } => {
                let ledger = open_ledger(database).await?;
                run_export_command(&ledger, &format, output.as_deref())?;
            }

            Commands::Import {
                input,
                format,
                dry_run,
            } => {
                let mut ledger = open_ledger(database).await?;
                run_import_command(&mut ledger, &input, format.as_deref(), dry_run).await?;
            }
        }

        Ok(())
    }
}

async fn open_ledger(database: &str) -> Result<Ledger<SqliteStore>> {
    let store = SqliteStore::open(database)
        .await
        .with_context(|| format!("Failed to open {}. Run `billy init` first", database))?;
    Ok(Ledger::load(store).await?)
}

fn warn_unknown_denomination(currency: &str, denomination: &str) {
    if !denominations_for(currency)
        .iter()
        .any(|d| d.label == denomination)
    {
        warn!(
            currency,
            denomination, "not a denomination of this currency, it will not count toward the total"
        );
    }
}

fn run_currencies_command<S>(ledger: &Ledger<S>) {
    println!("{:<4} {:<6} {:<6} {:>16}", "", "CODE", "SYMBOL", "TOTAL");
    println!("{}", "-".repeat(36));
    for code in CurrencyCode::ALL {
        println!(
            "{:<4} {:<6} {:<6} {:>16}",
            code.flag(),
            code.as_str(),
            code.symbol(),
            ledger.formatted_total(code.as_str())
        );
    }
}

fn run_show_command<S>(ledger: &Ledger<S>, currency: &str) {
    let symbol = symbol_for(currency);
    println!("{} {}", flag_for(currency), currency);
    println!();

    let rows = ledger.breakdown(currency);
    if rows.is_empty() {
        println!("No denominations for {}.", currency);
    } else {
        println!("{:<12} {:>8} {:>16}", "COIN", "COUNT", "SUBTOTAL");
        println!("{}", "-".repeat(38));
        for row in rows {
            // A zero count is shown blank, like an empty input field
            let count = if row.count == 0 {
                String::new()
            } else {
                row.count.to_string()
            };
            println!(
                "{:<12} {:>8} {:>16}",
                format!("{}{}", symbol, row.label),
                count,
                format!("{}{}", symbol, format_grouped(row.subtotal))
            );
        }
    }

    println!();
    println!("Total {}", ledger.formatted_total(currency));
}

fn run_export_command<S>(ledger: &Ledger<S>, format: &str, output: Option<&str>) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{Write, stdout};

    let exporter = Exporter::new(ledger);

    // Determine output writer
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match format {
        "csv" => {
            let count = exporter.export_counts_csv(writer)?;
            if output.is_some() {
                eprintln!("Exported {} denomination rows", count);
            }
        }
        "json" => {
            let snapshot = exporter.export_snapshot_json(writer)?;
            if output.is_some() {
                eprintln!("Exported counts for {} currencies", snapshot.counts.len());
            }
        }
        _ => {
            anyhow::bail!("Invalid export format '{}'. Valid formats: csv, json", format);
        }
    }

    Ok(())
}

async fn run_import_command(
    ledger: &mut Ledger<SqliteStore>,
    input: &str,
    format: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    use crate::io::{ImportOptions, Importer};
    use std::fs::File;

    let file =
        File::open(input).with_context(|| format!("Failed to open input file: {}", input))?;

    let format = match format {
        Some(f) => f,
        None if input.ends_with(".json") => "json",
        None => "csv",
    };

    let options = ImportOptions { dry_run };
    let mut importer = Importer::new(ledger);

    let result = match format {
        "csv" => importer.import_counts_csv(file, options).await?,
        "json" => importer.import_snapshot_json(file, options).await?,
        _ => {
            anyhow::bail!("Invalid import format '{}'. Valid formats: csv, json", format);
        }
    };

    if dry_run {
        println!("Dry run: {} counts would be imported", result.imported);
    } else {
        println!("Imported {} counts", result.imported);
    }
    if result.sanitized > 0 {
        println!(
            "{} counts were reduced to digits only (max 6)",
            result.sanitized
        );
    }
    if !result.errors.is_empty() {
        eprintln!("{} rows had errors:", result.errors.len());
        for err in &result.errors {
            match &err.field {
                Some(field) => eprintln!("  line {} ({}): {}", err.line, field, err.error),
                None => eprintln!("  line {}: {}", err.line, err.error),
            }
        }
    }

    Ok(())
}
