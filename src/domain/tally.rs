use super::{CountState, Units, count_in, denominations_for};

/// A total above this is worth a "that's a lot of money" notice.
pub const OVERFLOW_CEILING: Units = 99_999_999;

/// Sum of count * face value over the currency's denomination table.
/// Entries for labels outside the table never contribute.
pub fn compute_total(currency: &str, state: &CountState) -> Units {
    denominations_for(currency).iter().fold(0, |total: Units, d| {
        total.saturating_add(count_in(state, currency, d.label).saturating_mul(d.value))
    })
}

/// Returns true if the total is past the notice ceiling.
pub fn exceeds_ceiling(total: Units) -> bool {
    total > OVERFLOW_CEILING
}

/// One line of a currency breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationRow {
    pub label: &'static str,
    pub value: Units,
    pub count: Units,
    pub subtotal: Units,
}

/// Per-denomination counts and subtotals, ascending by face value.
pub fn breakdown(currency: &str, state: &CountState) -> Vec<DenominationRow> {
    denominations_for(currency)
        .iter()
        .map(|d| {
            let count = count_in(state, currency, d.label);
            DenominationRow {
                label: d.label,
                value: d.value,
                count,
                subtotal: count.saturating_mul(d.value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(currency: &str, entries: &[(&str, &str)]) -> CountState {
        let mut state = CountState::new();
        let counts = state.entry(currency.to_string()).or_default();
        for (denom, count) in entries {
            counts.insert(denom.to_string(), count.to_string());
        }
        state
    }

    #[test]
    fn test_twd_total() {
        let state = state_with("TWD", &[("1", "2"), ("5", "1"), ("1000", "3")]);
        assert_eq!(compute_total("TWD", &state), 3007);
    }

    #[test]
    fn test_cny_total_uses_scaled_values() {
        let state = state_with("CNY", &[("0.1", "10"), ("100", "1")]);
        assert_eq!(compute_total("CNY", &state), 1010);
    }

    #[test]
    fn test_stray_and_malformed_entries_ignored() {
        let state = state_with("TWD", &[("5", "2"), ("3", "100"), ("7", "junk"), ("10", "x1")]);
        assert_eq!(compute_total("TWD", &state), 10);
    }

    #[test]
    fn test_unknown_currency_totals_zero() {
        let state = state_with("USD", &[("1", "100")]);
        assert_eq!(compute_total("USD", &state), 0);
    }

    #[test]
    fn test_other_currencies_do_not_leak() {
        let state = state_with("JPY", &[("1000", "5")]);
        assert_eq!(compute_total("TWD", &state), 0);
        assert_eq!(compute_total("JPY", &state), 5000);
    }

    #[test]
    fn test_ceiling() {
        assert!(!exceeds_ceiling(OVERFLOW_CEILING));
        assert!(exceeds_ceiling(OVERFLOW_CEILING + 1));
    }

    #[test]
    fn test_breakdown_lists_every_denomination() {
        let state = state_with("HKD", &[("20", "3"), ("1000", "1")]);
        let rows = breakdown("HKD", &state);

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].label, "10");
        assert_eq!(rows[0].count, 0);
        assert_eq!(rows[1].label, "20");
        assert_eq!(rows[1].subtotal, 60);
        assert_eq!(rows[6].subtotal, 1000);
        assert_eq!(
            rows.iter().map(|r| r.subtotal).sum::<Units>(),
            compute_total("HKD", &state)
        );
    }
}
