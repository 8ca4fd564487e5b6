//! Flat string records as they live in store hashes.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name → value mapping stored as one hash.
///
/// Ordered so that listings and JSON output are stable for a given record.
pub type Record = BTreeMap<String, String>;

/// A JSON payload field that cannot be flattened into a hash value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("field `{field}` must be a string, number or boolean")]
pub struct NestedFieldError {
    pub field: String,
}

/// Flattens a JSON object into a [`Record`].
///
/// Strings are kept verbatim, numbers and booleans are stored as their JSON
/// text and `null` fields are dropped.
///
/// # Errors
///
/// Returns [`NestedFieldError`] for the first array or object value.
pub fn record_from_json(object: Map<String, Value>) -> Result<Record, NestedFieldError> {
    let mut record = Record::new();
    for (field, value) in object {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => return Err(NestedFieldError { field }),
        };
        record.insert(field, text);
    }
    Ok(record)
}
