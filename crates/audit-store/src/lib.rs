//! # audit-store
//!
//! Load-once, read-many storage for structured audit records.
//!
//! This crate provides:
//!
//! - [`Record`] — One audit-log line, an arbitrary JSON object with a
//!   memoized canonical text form
//! - [`AuditStore`] — Ordered record storage populated by a one-shot
//!   bulk load from a newline-delimited JSON source
//! - [`SharedStore`] — `Arc` handle for lock-free concurrent reads
//! - [`StoreError`] — Load and serialization failures
//!
//! ## Example
//!
//! ```rust
//! use audit_store::AuditStore;
//! use std::io::Cursor;
//!
//! let input = "{\"verb\":\"get\"}\n{\"verb\":\"delete\"}\n";
//! let store = AuditStore::load(Cursor::new(input)).unwrap();
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(store.search("delete").len(), 1);
//! assert_eq!(store.search("").len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod record;
pub mod store;

// Re-export main types
pub use error::{Result, StoreError};
pub use record::Record;
pub use store::{load_shared, AuditStore, SharedStore};
