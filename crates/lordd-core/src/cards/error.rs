//! Card normalization error type.

use std::path::PathBuf;

/// Failure while loading or normalizing raw card records. Aborts the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// A required key is absent from a record.
    #[error("card record {index}: missing key {key:?}")]
    KeyMissing { index: usize, key: &'static str },
    /// The record is not a JSON object.
    #[error("card record {index}: not a JSON object")]
    NotAnObject { index: usize },
    /// A field has the wrong JSON type (e.g. string where a number is expected).
    #[error("card record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The card file is not a JSON array.
    #[error("parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
