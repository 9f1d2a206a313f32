//! Ledger access trait and storage errors.

use crate::record::PurchaseRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("ledger io: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger data malformed: {0}")]
    Malformed(String),
}

/// Durable home of committed purchases.
///
/// Methods take `&self`; implementations serialize their own
/// read-modify-write cycles so concurrent sessions sharing one store
/// cannot lose updates.
pub trait Ledger {
    /// Persist a record, assigning a unique timestamp id. Returns the
    /// record as stored; it is visible to `list` immediately.
    fn append(&self, record: PurchaseRecord) -> Result<PurchaseRecord, StorageError>;

    /// All records, newest first.
    fn list(&self) -> Result<Vec<PurchaseRecord>, StorageError>;

    /// Remove the record with the given id. Unknown ids are a no-op.
    fn delete(&self, id: &str) -> Result<(), StorageError>;
}
