//! The ledger: an append-only record collection over a persistence seam.

use crate::core::entry::{Category, Entry, Record};
use crate::core::rates::RateTable;
use crate::core::summary::{self, CategoryTotals};
use crate::store::LedgerStore;
use anyhow::{Result, bail};
use tracing::{debug, info};

/// Owns the in-memory record collection, the injected rate table and
/// the backing store. Every successful mutation persists the whole
/// collection before returning.
pub struct Ledger {
    records: Vec<Record>,
    rates: RateTable,
    store: Box<dyn LedgerStore>,
}

impl Ledger {
    /// Loads the full collection from the store. A missing backing
    /// store yields an empty ledger; a corrupt one is a fatal error.
    pub fn load(rates: RateTable, store: Box<dyn LedgerStore>) -> Result<Self> {
        let records = store.load()?;
        debug!("Ledger loaded with {} records", records.len());
        Ok(Self {
            records,
            rates,
            store,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Appends a new entry and rewrites the backing store.
    ///
    /// The currency must be a known rate key and the price must not be
    /// negative; on either failure nothing is mutated or persisted.
    pub fn add_entry(
        &mut self,
        category: Category,
        description: &str,
        price: f64,
        currency: &str,
    ) -> Result<()> {
        if !self.rates.contains(currency) {
            bail!(
                "Unknown currency: {currency}. Supported currencies: {}",
                self.rates.codes().join(", ")
            );
        }
        if price < 0.0 || price.is_nan() {
            bail!("Price must be a non-negative number, got {price}");
        }

        self.records.push(Record::from(Entry {
            category,
            description: description.to_string(),
            price,
            currency: currency.to_string(),
        }));
        self.store.save(&self.records)?;
        info!("Added {category} entry: {description} ({price} {currency})");
        Ok(())
    }

    /// Aggregates all records into per-category totals in `target_currency`.
    pub fn summarize(&self, target_currency: &str) -> Result<CategoryTotals> {
        summary::summarize(&self.records, &self.rates, target_currency)
    }
}
