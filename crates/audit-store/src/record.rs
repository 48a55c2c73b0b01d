//! The audit record type and its canonical text form.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Result, StoreError};

/// One parsed audit-log line: an arbitrary JSON object.
///
/// A record is immutable once constructed. Its canonical text — the
/// deterministic serialized form used for substring matching and for
/// display — is computed once at construction and memoized, so the
/// same record always serializes to the same text for the life of
/// the process.
#[derive(Debug, Clone)]
pub struct Record {
    /// Key/value fields, in the order they appeared on the line.
    fields: Map<String, Value>,
    /// Memoized canonical serialization of `fields`.
    canonical: String,
}

impl Record {
    /// Builds a record from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAnObject`] if the value is not a JSON
    /// object, or [`StoreError::Serialization`] if the canonical text
    /// cannot be produced.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            other => Err(StoreError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Builds a record directly from a field map.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the canonical text
    /// cannot be produced.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self> {
        let canonical = serde_json::to_string(&fields)?;
        Ok(Self { fields, canonical })
    }

    /// Parses a single log line into a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the line is not valid
    /// JSON, or [`StoreError::NotAnObject`] if it parses to something
    /// other than an object.
    pub fn parse(line: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(line)?;
        Self::from_value(value)
    }

    /// The record's fields, in line order.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Looks up a single field by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The canonical serialized text of this record.
    #[must_use]
    pub fn canonical_text(&self) -> &str {
        &self.canonical
    }

    /// Case-insensitive contiguous-substring match of `query` against
    /// the canonical text.
    ///
    /// The empty query matches every record.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.canonical.to_lowercase().contains(&query_lower)
    }
}

/// Records compare by field content; the memoized canonical text is
/// derived state and never diverges from the fields.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// Human-readable name for a JSON value's type, for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
