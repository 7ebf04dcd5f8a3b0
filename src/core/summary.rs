//! Aggregates ledger records into per-category totals in a target currency.

use crate::core::entry::{Category, Record};
use crate::core::rates::RateTable;
use anyhow::{Result, bail};
use tracing::debug;

/// Per-category running totals, normalized to a single target currency.
/// Values are unrounded; display rounds to two decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals {
    pub target_currency: String,
    pub work: f64,
    pub parts: f64,
    pub expenses: f64,
}

impl CategoryTotals {
    pub fn total(&self) -> f64 {
        self.work + self.parts + self.expenses
    }
}

/// Converts every record's price into `target_currency` and accumulates
/// totals per category.
///
/// Records missing category, price or currency are skipped, as are
/// records whose currency or category is not recognized. They stay in
/// the ledger; they just contribute to no total.
pub fn summarize(
    records: &[Record],
    rates: &RateTable,
    target_currency: &str,
) -> Result<CategoryTotals> {
    if !rates.contains(target_currency) {
        bail!(
            "Unknown currency: {target_currency}. Supported currencies: {}",
            rates.codes().join(", ")
        );
    }

    let mut totals = CategoryTotals {
        target_currency: target_currency.to_string(),
        work: 0.0,
        parts: 0.0,
        expenses: 0.0,
    };

    for record in records {
        let (Some(category), Some(price), Some(currency)) = (
            record.category.as_deref(),
            record.price,
            record.currency.as_deref(),
        ) else {
            debug!("Skipping incomplete record: {record:?}");
            continue;
        };
        if !rates.contains(currency) {
            debug!("Skipping record with unknown currency {currency}");
            continue;
        }
        let Ok(category) = category.parse::<Category>() else {
            debug!("Skipping record with unrecognized category {category}");
            continue;
        };

        let converted = rates.convert(price, currency, target_currency)?;
        match category {
            Category::Work => totals.work += converted,
            Category::Parts => totals.parts += converted,
            Category::Expenses => totals.expenses += converted,
        }
    }

    Ok(totals)
}
