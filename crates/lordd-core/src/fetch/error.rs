//! Download error type.

use std::path::PathBuf;

/// Failure of a single set download. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Curl reported an error (bad URL, DNS, connect, read, etc.).
    #[error("GET {url} failed: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// Local folder or file could not be created or written.
    #[error("write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
