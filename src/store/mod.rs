pub mod json;
pub mod memory;

use crate::core::entry::Record;
use anyhow::Result;

/// Persistence seam for the ledger.
///
/// The contract is whole-collection: `load` returns every record and
/// `save` rewrites the full collection. There is no incremental append
/// and no durability guarantee against partial writes.
pub trait LedgerStore {
    /// Reads the full record collection. A missing backing store is an
    /// empty collection, not an error; a corrupt one is an error.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replaces the backing store with `records`.
    fn save(&self, records: &[Record]) -> Result<()>;
}
