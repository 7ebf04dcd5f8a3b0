//! Fixed exchange-rate table and currency conversion

use anyhow::{Result, anyhow};
use std::collections::HashMap;
use tracing::debug;

/// Base currency every conversion is routed through.
pub const BASE_CURRENCY: &str = "USD";

/// Immutable mapping from currency code to its rate relative to the
/// base currency. Built once at startup and injected where needed,
/// never a global.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.rates.contains_key(currency)
    }

    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    /// Supported currency codes, sorted for stable display.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Converts `amount` from one currency to another through the base
    /// currency. No rounding is applied; callers round at display time.
    ///
    /// Both currencies must be present in the table; a missing one is
    /// returned as a lookup error.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        let from_rate = self
            .rate(from)
            .ok_or_else(|| anyhow!("No exchange rate for currency: {from}"))?;
        let to_rate = self
            .rate(to)
            .ok_or_else(|| anyhow!("No exchange rate for currency: {to}"))?;

        let amount_in_base = amount / from_rate;
        let converted = amount_in_base * to_rate;
        debug!("Converted {amount} {from} to {converted} {to} via {BASE_CURRENCY}");
        Ok(converted)
    }
}

impl Default for RateTable {
    /// The fixed table: USD is the base, RUB and KZT quoted against it.
    fn default() -> Self {
        Self::new(HashMap::from([
            (BASE_CURRENCY.to_string(), 1.0),
            ("RUB".to_string(), 95.0),
            ("KZT".to_string(), 430.0),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversion() {
        let rates = RateTable::default();
        for code in ["USD", "RUB", "KZT"] {
            assert_eq!(rates.convert(42.5, code, code).unwrap(), 42.5);
        }
    }

    #[test]
    fn test_conversion_round_trip() {
        let rates = RateTable::default();
        let codes = rates.codes();
        for from in &codes {
            for to in &codes {
                let there = rates.convert(123.45, from, to).unwrap();
                let back = rates.convert(there, to, from).unwrap();
                assert!(
                    (back - 123.45).abs() < 1e-9,
                    "round trip {from}->{to}->{from} drifted: {back}"
                );
            }
        }
    }

    #[test]
    fn test_conversion_through_base() {
        let rates = RateTable::default();
        assert!((rates.convert(9500.0, "RUB", "USD").unwrap() - 100.0).abs() < 1e-9);
        assert!((rates.convert(4300.0, "KZT", "USD").unwrap() - 10.0).abs() < 1e-9);
        assert!((rates.convert(10.0, "USD", "KZT").unwrap() - 4300.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_currency_is_a_lookup_error() {
        let rates = RateTable::default();
        let err = rates.convert(1.0, "EUR", "USD").unwrap_err();
        assert!(err.to_string().contains("EUR"));
        assert!(rates.convert(1.0, "USD", "EUR").is_err());
    }

    #[test]
    fn test_alternate_table_injection() {
        let rates = RateTable::new(HashMap::from([
            ("USD".to_string(), 1.0),
            ("EUR".to_string(), 0.9),
        ]));
        assert!(rates.contains("EUR"));
        assert!(!rates.contains("RUB"));
        assert!((rates.convert(90.0, "EUR", "USD").unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_codes_are_sorted() {
        let rates = RateTable::default();
        assert_eq!(rates.codes(), vec!["KZT", "RUB", "USD"]);
    }
}
