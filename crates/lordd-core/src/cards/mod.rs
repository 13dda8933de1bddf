//! Card JSON loading and normalization.
//!
//! A set's card file is a JSON array of objects keyed in camelCase. Each
//! object becomes exactly one [`NormalizedCard`], in input order; the first
//! malformed record fails the whole batch.

mod error;
mod normalized;
mod raw;
mod text;

pub use error::NormalizeError;
pub use normalized::NormalizedCard;
pub use raw::{RawCard, REQUIRED_KEYS};
pub use text::{clean_flavor_text, normalize_keyword};

use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a JSON array of raw card records from `path`.
pub fn load_records(path: &Path) -> Result<Vec<Value>, NormalizeError> {
    let file = File::open(path).map_err(|source| NormalizeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Value> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| NormalizeError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded card records");
    Ok(records)
}

/// Normalizes every record, stopping at the first one that is malformed.
pub fn normalize(raw_records: &[Value]) -> Result<Vec<NormalizedCard>, NormalizeError> {
    raw_records
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(index, record))
        .collect()
}

/// Normalizes one record; `index` is its position in the batch, used in errors.
pub fn normalize_record(index: usize, record: &Value) -> Result<NormalizedCard, NormalizeError> {
    let fields = record.as_object().ok_or(NormalizeError::NotAnObject { index })?;
    if let Some(key) = REQUIRED_KEYS.iter().copied().find(|key| !fields.contains_key(*key)) {
        return Err(NormalizeError::KeyMissing { index, key });
    }
    let raw = RawCard::deserialize(record)
        .map_err(|source| NormalizeError::InvalidRecord { index, source })?;
    Ok(NormalizedCard::from(raw))
}

/// One `key: value` line per field of a raw record, in the record's key order.
pub fn raw_preview(record: &Value) -> Vec<String> {
    match record.as_object() {
        Some(fields) => fields
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect(),
        None => vec![record.to_string()],
    }
}
