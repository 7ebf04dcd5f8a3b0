//! Ledger entry types and their persisted form

use anyhow::bail;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of work a ledger entry accounts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Completed labor
    Work,
    /// Parts purchased for a job
    Parts,
    /// Miscellaneous expenses
    Expenses,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Parts => "parts",
            Category::Expenses => "expenses",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Category::Work),
            "parts" => Ok(Category::Parts),
            "expenses" => Ok(Category::Expenses),
            _ => bail!("Unknown category: {s}"),
        }
    }
}

/// A single validated transaction. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub category: Category,
    pub description: String,
    pub price: f64,
    pub currency: String,
}

/// Persisted form of an entry.
///
/// Every field is optional so that incomplete records found in the data
/// file survive a load and the following rewrite untouched. Aggregation
/// skips them instead of repairing or rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl From<Entry> for Record {
    fn from(entry: Entry) -> Self {
        Record {
            category: Some(entry.category.as_str().to_string()),
            description: Some(entry.description),
            price: Some(entry.price),
            currency: Some(entry.currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in [Category::Work, Category::Parts, Category::Expenses] {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_fails_to_parse() {
        assert!("food".parse::<Category>().is_err());
        assert!("Work".parse::<Category>().is_err());
    }

    #[test]
    fn test_record_serializes_with_flat_keys() {
        let record = Record::from(Entry {
            category: Category::Parts,
            description: "Brake pads".to_string(),
            price: 9500.0,
            currency: "RUB".to_string(),
        });

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"category":"parts","description":"Brake pads","price":9500.0,"currency":"RUB"}"#
        );
    }

    #[test]
    fn test_incomplete_record_round_trips_untouched() {
        let json = r#"{"category":"work","currency":"USD"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.price.is_none());
        assert!(record.description.is_none());

        // Missing fields must not reappear as nulls on rewrite
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }
}
