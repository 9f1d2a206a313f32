//! moodspend-store: CSV-backed ledger persistence.
//!
//! The backing file is a flat CSV with a header row
//! (`timestamp,item,amount,sentiment,category`). Writes are whole-file:
//! read every row, modify in memory, write everything back. A mutex
//! serializes each cycle so two sessions sharing one store cannot lose
//! updates.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{Duration, Timelike};
use moodspend_core::{Ledger, PurchaseRecord, StorageError};
use tracing::debug;

const HEADER: [&str; 5] = ["timestamp", "item", "amount", "sentiment", "category"];

#[derive(Debug)]
pub struct CsvLedger {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvLedger {
    /// Open a ledger at `path`, creating an empty file with the canonical
    /// header if none exists yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let ledger = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };
        if !ledger.path.exists() {
            ledger.write_all(&[])?;
            debug!(path = %ledger.path.display(), "initialized empty ledger");
        }
        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<PurchaseRecord>, StorageError> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(into_storage)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            // A row that fails to deserialize fails the whole load; dropping
            // it silently would let the next write erase it for good.
            records.push(row.map_err(into_storage)?);
        }
        Ok(records)
    }

    fn write_all(&self, records: &[PurchaseRecord]) -> Result<(), StorageError> {
        let mut writer = csv::Writer::from_path(&self.path).map_err(into_storage)?;
        if records.is_empty() {
            // serialize() emits the header implicitly; an empty ledger still
            // needs the canonical schema row
            writer.write_record(HEADER).map_err(into_storage)?;
        }
        for record in records {
            writer.serialize(record).map_err(into_storage)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Ledger for CsvLedger {
    fn append(&self, mut record: PurchaseRecord) -> Result<PurchaseRecord, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.read_all()?;

        // Second-resolution timestamp is the id; bump on collision so every
        // row stays individually addressable
        record.occurred_at = record
            .occurred_at
            .with_nanosecond(0)
            .unwrap_or(record.occurred_at);
        while records.iter().any(|r| r.occurred_at == record.occurred_at) {
            record.occurred_at += Duration::seconds(1);
        }

        records.push(record.clone());
        self.write_all(&records)?;
        debug!(id = %record.id(), item = %record.item, "appended purchase");
        Ok(record)
    }

    fn list(&self) -> Result<Vec<PurchaseRecord>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.read_all()?;
        records.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(records)
    }

    fn delete(&self, id: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() != before {
            self.write_all(&records)?;
            debug!(id, "deleted purchase");
        }
        Ok(())
    }
}

fn into_storage(err: csv::Error) -> StorageError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => StorageError::Io(io),
            _ => StorageError::Malformed("unknown io error".to_string()),
        }
    } else {
        StorageError::Malformed(err.to_string())
    }
}
