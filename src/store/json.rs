use crate::core::entry::Record;
use crate::store::LedgerStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Flat JSON file store. The whole collection is serialized as a single
/// array of record objects and rewritten on every save.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!("No ledger file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read ledger file: {}", self.path.display()))?;
        let records: Vec<Record> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse ledger file: {}", self.path.display()))?;
        debug!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string(records).context("Failed to serialize ledger")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write ledger file: {}", self.path.display()))?;
        debug!(
            "Saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
