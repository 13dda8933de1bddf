//! Archive expansion error type.

use std::path::PathBuf;

/// Failure while expanding a set archive. Entries already written are left in place.
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    /// Archive is corrupt or not a zip file.
    #[error("{}: invalid archive: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    /// An entry name is absolute or climbs out of the extraction directory.
    #[error("{}: entry {name:?} escapes the extraction directory", path.display())]
    UnsafeEntry { path: PathBuf, name: String },
    /// Filesystem failure (permissions, disk full, archive removal).
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExpandError {
    /// True for corrupt, unsupported or malicious archives.
    pub fn is_format(&self) -> bool {
        matches!(self, ExpandError::Format { .. } | ExpandError::UnsafeEntry { .. })
    }
}
