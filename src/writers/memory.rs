//! In-memory writer that keeps every record it receives

use crate::core::{Record, Result, Writer};
use parking_lot::Mutex;
use std::sync::Arc;

/// Records captured by a [`MemoryWriter`], readable after the writer has
/// been moved into a logger.
pub type SharedRecords = Arc<Mutex<Vec<Record>>>;

/// Pass-through writer that stores a copy of each record.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    records: SharedRecords,
}

impl MemoryWriter {
    /// Create a writer and the handle to what it captures
    pub fn new() -> (Self, SharedRecords) {
        let writer = Self::default();
        let records = writer.records();
        (writer, records)
    }

    pub fn records(&self) -> SharedRecords {
        Arc::clone(&self.records)
    }
}

impl Writer for MemoryWriter {
    fn write<'r>(&mut self, record: &'r Record) -> Result<&'r Record> {
        self.records.lock().push(record.clone());
        Ok(record)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
