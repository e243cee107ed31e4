use super::Units;

/// The closed set of currencies the counter knows how to tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurrencyCode {
    Twd,
    Jpy,
    Krw,
    Cny,
    Hkd,
    Sgd,
}

/// A single coin or bill: the label shown to the user and its face value.
///
/// Values are pre-scaled so every sum stays integral: CNY "0.1" is worth 1,
/// "1" is worth 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denomination {
    pub label: &'static str,
    pub value: Units,
}

const fn denom(label: &'static str, value: Units) -> Denomination {
    Denomination { label, value }
}

const TWD: &[Denomination] = &[
    denom("1", 1),
    denom("5", 5),
    denom("10", 10),
    denom("50", 50),
    denom("100", 100),
    denom("500", 500),
    denom("1000", 1000),
];

const JPY: &[Denomination] = &[
    denom("1", 1),
    denom("5", 5),
    denom("10", 10),
    denom("50", 50),
    denom("100", 100),
    denom("500", 500),
    denom("1000", 1000),
    denom("5000", 5000),
    denom("10000", 10000),
];

const KRW: &[Denomination] = &[
    denom("1", 1),
    denom("5", 5),
    denom("10", 10),
    denom("50", 50),
    denom("100", 100),
    denom("500", 500),
    denom("1000", 1000),
    denom("5000", 5000),
    denom("10000", 10000),
    denom("50000", 50000),
];

const HKD: &[Denomination] = &[
    denom("10", 10),
    denom("20", 20),
    denom("50", 50),
    denom("100", 100),
    denom("200", 200),
    denom("500", 500),
    denom("1000", 1000),
];

const SGD: &[Denomination] = &[
    denom("5", 5),
    denom("10", 10),
    denom("20", 20),
    denom("50", 50),
    denom("100", 100),
    denom("200", 200),
    denom("500", 500),
    denom("1000", 1000),
];

const CNY: &[Denomination] = &[
    denom("0.1", 1),
    denom("0.5", 5),
    denom("1", 10),
    denom("5", 50),
    denom("10", 100),
    denom("20", 200),
    denom("50", 500),
    denom("100", 1000),
];

impl CurrencyCode {
    /// All currencies in selector order.
    pub const ALL: [CurrencyCode; 6] = [
        CurrencyCode::Twd,
        CurrencyCode::Jpy,
        CurrencyCode::Krw,
        CurrencyCode::Cny,
        CurrencyCode::Hkd,
        CurrencyCode::Sgd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Twd => "TWD",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Krw => "KRW",
            CurrencyCode::Cny => "CNY",
            CurrencyCode::Hkd => "HKD",
            CurrencyCode::Sgd => "SGD",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "TWD" => Some(CurrencyCode::Twd),
            "JPY" => Some(CurrencyCode::Jpy),
            "KRW" => Some(CurrencyCode::Krw),
            "CNY" => Some(CurrencyCode::Cny),
            "HKD" => Some(CurrencyCode::Hkd),
            "SGD" => Some(CurrencyCode::Sgd),
            _ => None,
        }
    }

    /// Denomination table, ascending by face value.
    pub fn denominations(&self) -> &'static [Denomination] {
        match self {
            CurrencyCode::Twd => TWD,
            CurrencyCode::Jpy => JPY,
            CurrencyCode::Krw => KRW,
            CurrencyCode::Cny => CNY,
            CurrencyCode::Hkd => HKD,
            CurrencyCode::Sgd => SGD,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Twd | CurrencyCode::Hkd | CurrencyCode::Sgd => "$",
            CurrencyCode::Jpy | CurrencyCode::Cny => "¥",
            CurrencyCode::Krw => "₩",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            CurrencyCode::Twd => "🇹🇼",
            CurrencyCode::Jpy => "🇯🇵",
            CurrencyCode::Krw => "🇰🇷",
            CurrencyCode::Cny => "🇨🇳",
            CurrencyCode::Hkd => "🇭🇰",
            CurrencyCode::Sgd => "🇸🇬",
        }
    }

    /// Face value for a denomination label, if the label belongs to this currency.
    pub fn value_of(&self, label: &str) -> Option<Units> {
        self.denominations()
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value)
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Denominations for an arbitrary code. Unknown codes have none.
pub fn denominations_for(code: &str) -> &'static [Denomination] {
    CurrencyCode::from_str(code)
        .map(|c| c.denominations())
        .unwrap_or(&[])
}

/// Display symbol for an arbitrary code. Unknown codes are shown as themselves.
pub fn symbol_for(code: &str) -> &str {
    match CurrencyCode::from_str(code) {
        Some(c) => c.symbol(),
        None => code,
    }
}

/// Flag glyph for an arbitrary code, empty for unknown codes.
pub fn flag_for(code: &str) -> &'static str {
    CurrencyCode::from_str(code).map(|c| c.flag()).unwrap_or("")
}
