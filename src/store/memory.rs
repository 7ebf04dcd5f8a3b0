use crate::core::entry::Record;
use crate::store::LedgerStore;
use anyhow::Result;
use std::sync::{Arc, Mutex};

/// In-memory store backed by a shared vector. Clones share the same
/// backing storage, which lets tests keep a handle on what the ledger
/// persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the currently persisted records.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }
}
