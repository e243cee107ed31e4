use std::collections::BTreeMap;

use super::Units;

/// Maximum number of characters kept from a typed count.
pub const MAX_COUNT_DIGITS: usize = 6;

/// Denomination label -> count string for one currency.
pub type CurrencyCounts = BTreeMap<String, String>;

/// Currency code -> per-denomination counts. This is exactly what gets persisted.
pub type CountState = BTreeMap<String, CurrencyCounts>;

/// Keep ASCII digits only, then the first six of them. Applies to typed input.
/// Example: "12a3!@#" -> "123", "1234567" -> "123456", "abc" -> ""
pub fn sanitize_count(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_COUNT_DIGITS)
        .collect()
}

/// Keep ASCII digits only, whatever the length. Counts grown by quick-add can
/// be longer than typed input allows, so restored state is not truncated.
/// Example: "1000009" -> "1000009", "12x" -> "12"
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Read a stored count. Empty, negative or non-numeric content counts as zero.
pub fn parse_count(stored: &str) -> Units {
    stored
        .parse::<Units>()
        .ok()
        .filter(|n| *n >= 0)
        .unwrap_or(0)
}

/// Look up a count, defaulting to zero when the currency or denomination is absent.
pub fn count_in(state: &CountState, currency: &str, denom: &str) -> Units {
    state
        .get(currency)
        .and_then(|counts| counts.get(denom))
        .map(|s| parse_count(s))
        .unwrap_or(0)
}
