use tracing::{debug, warn};

use crate::domain::{
    CountState, CurrencyCounts, DenominationRow, Units, breakdown, compute_total, count_in,
    denominations_for, digits_only, exceeds_ceiling, format_total, sanitize_count,
};
use crate::storage::{COIN_COUNTS_KEY, KeyValueStore};

use super::AppError;

/// How much one tap of the quick-add button adds to a count.
pub const QUICK_ADD_STEP: Units = 10;

/// The coin counting ledger: per-currency counts, their totals, and
/// write-through persistence to an injected key/value store.
///
/// Currency and denomination arguments are plain strings. Codes outside the
/// known set are tolerated and behave as currencies with no denominations.
pub struct Ledger<S> {
    store: S,
    counts: CountState,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Load the count state from the store.
    /// A missing or malformed record starts an empty ledger.
    pub async fn load(store: S) -> Result<Self, AppError> {
        let counts = match store.get(COIN_COUNTS_KEY).await? {
            Some(raw) => decode_counts(&raw),
            None => CountState::new(),
        };
        debug!(currencies = counts.len(), "loaded count state");
        Ok(Self { store, counts })
    }

    /// Store a typed count. Everything but ASCII digits is dropped and at
    /// most six digits are kept; the stored string is returned.
    pub async fn set_count(
        &mut self,
        currency: &str,
        denom: &str,
        raw: &str,
    ) -> Result<String, AppError> {
        let sanitized = sanitize_count(raw);
        self.counts
            .entry(currency.to_string())
            .or_default()
            .insert(denom.to_string(), sanitized.clone());
        debug!(currency, denom, count = %sanitized, "set count");

        self.persist().await?;
        Ok(sanitized)
    }

    /// Add ten to a count. Returns true when the currency total now exceeds
    /// the notice ceiling; the increment is kept either way.
    pub async fn increment_by_ten(&mut self, currency: &str, denom: &str) -> Result<bool, AppError> {
        let updated = count_in(&self.counts, currency, denom).saturating_add(QUICK_ADD_STEP);
        self.counts
            .entry(currency.to_string())
            .or_default()
            .insert(denom.to_string(), updated.to_string());

        let total = self.total(currency);
        debug!(currency, denom, count = updated, total, "added ten");

        self.persist().await?;
        Ok(exceeds_ceiling(total))
    }

    /// Set every denomination of the currency back to "0". Entries outside
    /// the currency's table are dropped.
    pub async fn reset_currency(&mut self, currency: &str) -> Result<(), AppError> {
        let reset: CurrencyCounts = denominations_for(currency)
            .iter()
            .map(|d| (d.label.to_string(), "0".to_string()))
            .collect();
        self.counts.insert(currency.to_string(), reset);
        debug!(currency, "reset counts");

        self.persist().await
    }

    /// Replace the whole count state. Non-digits are dropped from every count;
    /// length is kept, since quick-add counts may exceed the typed limit.
    pub async fn restore(&mut self, counts: CountState) -> Result<(), AppError> {
        self.counts = counts
            .into_iter()
            .map(|(currency, denoms)| {
                let denoms = denoms
                    .into_iter()
                    .map(|(denom, raw)| (denom, digits_only(&raw)))
                    .collect();
                (currency, denoms)
            })
            .collect();
        debug!(currencies = self.counts.len(), "restored count state");

        self.persist().await
    }

    async fn persist(&self) -> Result<(), AppError> {
        let encoded = serde_json::to_string(&self.counts)?;
        self.store.set(COIN_COUNTS_KEY, &encoded).await?;
        Ok(())
    }
}

impl<S> Ledger<S> {
    /// Sum of count * face value for the currency.
    pub fn total(&self, currency: &str) -> Units {
        compute_total(currency, &self.counts)
    }

    /// The total with its currency symbol and thousands separators, e.g. "$3,007".
    pub fn formatted_total(&self, currency: &str) -> String {
        format_total(currency, self.total(currency))
    }

    /// The parsed count for one denomination, zero when absent or malformed.
    pub fn count(&self, currency: &str, denom: &str) -> Units {
        count_in(&self.counts, currency, denom)
    }

    /// Per-denomination counts and subtotals, ascending by face value.
    pub fn breakdown(&self, currency: &str) -> Vec<DenominationRow> {
        breakdown(currency, &self.counts)
    }

    pub fn counts(&self) -> &CountState {
        &self.counts
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn decode_counts(raw: &str) -> CountState {
    match serde_json::from_str(raw) {
        Ok(counts) => counts,
        Err(err) => {
            warn!(error = %err, "ignoring malformed count record");
            CountState::new()
        }
    }
}
