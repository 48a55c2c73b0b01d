//! In-memory, load-once audit record storage.
//!
//! This module provides:
//! - [`AuditStore`] — Ordered record storage populated by a one-shot
//!   bulk load and read-only thereafter
//! - [`SharedStore`] — `Arc` handle for lock-free shared reads
//!
//! The store is deliberately immutable after load: the serving phase
//! only ever reads, so concurrent requests need no synchronization.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::record::Record;

/// Ordered, load-once, read-many collection of audit records.
///
/// Records are held in ingestion order (one line = one record, in
/// file order) and that order is preserved across all reads.
#[derive(Debug, Default)]
pub struct AuditStore {
    /// All records, in line order.
    records: Vec<Record>,
}

impl AuditStore {
    /// Creates an empty store. Zero records is a valid state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads records from a line-oriented JSON reader.
    ///
    /// Each line must be a syntactically valid JSON object. The first
    /// line that is not (including blank lines) aborts the whole load;
    /// partial loads are never committed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] with the 1-based line number and
    /// line text of the first bad line, or [`StoreError::Io`] if the
    /// reader fails.
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let record = Record::parse(&line).map_err(|_| StoreError::Parse {
                line: index + 1,
                content: line.clone(),
            })?;
            records.push(record);
        }

        debug!(records = records.len(), "audit log loaded");
        Ok(Self { records })
    }

    /// Loads records from a newline-delimited JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be opened or
    /// read, or [`StoreError::Parse`] on the first malformed line.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file))
    }

    /// The full ordered record sequence, as a read-only view.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filters the store by case-insensitive substring match over
    /// each record's canonical text.
    ///
    /// The empty query is "no filter": the identity result set, all
    /// records in order. No matches yields an empty vec, never an
    /// absent value. Store order is always preserved.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Record> {
        if query.is_empty() {
            return self.records.iter().collect();
        }

        let query_lower = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.canonical_text().to_lowercase().contains(&query_lower))
            .collect()
    }
}

/// Shared read-only store handle.
///
/// The store never changes after load, so readers share it without
/// locking.
pub type SharedStore = Arc<AuditStore>;

/// Loads a file and wraps the store for sharing across requests.
///
/// # Errors
///
/// Propagates [`StoreError::Io`] and [`StoreError::Parse`] from the
/// underlying load.
pub fn load_shared(path: impl AsRef<Path>) -> Result<SharedStore> {
    Ok(Arc::new(AuditStore::load_path(path)?))
}
