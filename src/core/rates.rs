//! Exchange rate table and unit conversion.
//!
//! All table entries are anchored to a single base currency. Currency codes
//! map to base-relative multipliers; the `Gold` and `Silver` keys instead
//! hold a per-troy-ounce spot price in the base currency and back the
//! gram-denominated metal units used on line items.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Currency every table entry is anchored to (rate 1.0).
pub const BASE_CURRENCY: &str = "USD";

/// Unit symbol for a gram of gold.
pub const GOLD_GRAM: &str = "GOLD_GRAM";

/// Unit symbol for a gram of silver.
pub const SILVER_GRAM: &str = "SILVER_GRAM";

const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

const GOLD_SPOT_KEY: &str = "Gold";
const SILVER_SPOT_KEY: &str = "Silver";

/// A mapping from unit symbol to rate, relative to [`BASE_CURRENCY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(HashMap<String, f64>);

impl RateTable {
    pub fn new() -> Self {
        RateTable::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, rate: f64) {
        self.0.insert(symbol.into(), rate);
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.0.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlays `other` on top of this table. Entries in `other` win, so
    /// merging live rates over a static fallback table keeps fallback-only
    /// entries (e.g. metal spot prices) intact.
    pub fn merge(&mut self, other: RateTable) {
        self.0.extend(other.0);
    }

    /// Base-relative rate for a currency symbol. A missing rate falls back
    /// to 1, and so does a rate of exactly 0; conversion must never divide
    /// by zero even on a malformed table.
    fn currency_rate(&self, symbol: &str) -> f64 {
        match self.0.get(symbol) {
            Some(&rate) if rate != 0.0 => rate,
            _ => 1.0,
        }
    }

    /// Per-troy-ounce spot price in the base currency. Missing means the
    /// metal cannot be valued, which is 0 rather than the currency fallback.
    fn spot_price(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }
}

impl FromIterator<(String, f64)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        RateTable(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, f64); N]> for RateTable {
    fn from(entries: [(&str, f64); N]) -> Self {
        entries
            .into_iter()
            .map(|(symbol, rate)| (symbol.to_string(), rate))
            .collect()
    }
}

fn metal_spot_key(unit: &str) -> Option<&'static str> {
    match unit {
        GOLD_GRAM => Some(GOLD_SPOT_KEY),
        SILVER_GRAM => Some(SILVER_SPOT_KEY),
        _ => None,
    }
}

/// Converts `amount` from one unit to another through the base currency.
///
/// Passing `None` for `rates` means the table has not loaded yet and every
/// conversion yields 0. A loaded table never fails either: unknown currency
/// symbols are treated as rate 1 and unknown metals as worthless, so callers
/// can render partial data without special-casing errors.
///
/// Metal weight units are first valued in the base currency from their spot
/// price (`amount` is in grams, spot prices are per troy ounce), then follow
/// the standard currency path. A metal-to-metal conversion therefore routes
/// through the base currency rather than a direct pair lookup.
pub fn convert(amount: f64, from: &str, to: &str, rates: Option<&RateTable>) -> f64 {
    let Some(rates) = rates else {
        return 0.0;
    };

    if from == to {
        return amount;
    }

    if let Some(spot_key) = metal_spot_key(from) {
        let price_per_gram = rates.spot_price(spot_key) / GRAMS_PER_TROY_OUNCE;
        let value_in_base = amount * price_per_gram;
        return convert(value_in_base, BASE_CURRENCY, to, Some(rates));
    }

    let amount_in_base = amount / rates.currency_rate(from);
    amount_in_base * rates.currency_rate(to)
}
