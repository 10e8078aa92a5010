use crate::logging::{LogRecord, LogSink};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Append-only in-memory sink. Records are kept in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        // A panicking writer must not hide what was already recorded
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything emitted so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: LogRecord) {
        self.lock().push(record);
    }
}
