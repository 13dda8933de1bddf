//! Zip expansion of downloaded set archives.
//!
//! `sets/set1-en_us.zip` is extracted into `sets/set1-en_us/` (created or
//! reused) and the archive is deleted afterwards. Treat as at-most-once per
//! archive: there is no rollback if extraction stops half way.

mod error;

pub use error::ExpandError;

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::ZipArchive;

const BUF_SIZE: usize = 64 * 1024;

/// Outcome of a successful expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandReport {
    /// Directory the entries were extracted into.
    pub dir: PathBuf,
    /// Number of entries in the archive (files and directories).
    pub entries: usize,
    /// Number of file entries written.
    pub files: usize,
}

/// Directory an archive expands into: same parent, archive name without its extension.
pub fn extraction_dir(archive_path: &Path) -> PathBuf {
    archive_path.with_extension("")
}

/// Extracts `archive_path` next to itself and deletes it. Returns the extraction directory.
pub fn expand(archive_path: &Path) -> Result<PathBuf, ExpandError> {
    expand_with_report(archive_path).map(|report| report.dir)
}

/// Like [`expand`] but also reports how many entries were extracted.
pub fn expand_with_report(archive_path: &Path) -> Result<ExpandReport, ExpandError> {
    let dir = extraction_dir(archive_path);
    let file = File::open(archive_path).map_err(io("open", archive_path))?;
    let mut archive = ZipArchive::new(file).map_err(|e| zip_error(archive_path, e))?;

    fs::create_dir_all(&dir).map_err(io("create", &dir))?;
    tracing::debug!(
        archive = %archive_path.display(),
        dir = %dir.display(),
        entries = archive.len(),
        "expanding archive"
    );

    let mut files = 0usize;
    let mut buf = vec![0u8; BUF_SIZE];
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| zip_error(archive_path, e))?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| ExpandError::UnsafeEntry {
                path: archive_path.to_path_buf(),
                name: entry.name().to_string(),
            })?;
        let out_path = dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(io("create", &out_path))?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(io("create", parent))?;
        }
        let mut out = File::create(&out_path).map_err(io("create", &out_path))?;
        loop {
            // Entry data comes out of the decompressor; any read failure is a damaged entry.
            let n = entry.read(&mut buf).map_err(|e| ExpandError::Format {
                path: archive_path.to_path_buf(),
                source: ZipError::Io(e),
            })?;
            if n == 0 {
                break;
            }
            out.write_all(&buf[..n]).map_err(io("write", &out_path))?;
        }
        files += 1;
    }

    let entries = archive.len();
    drop(archive);
    fs::remove_file(archive_path).map_err(io("remove", archive_path))?;
    tracing::info!(
        dir = %dir.display(),
        entries,
        files,
        "expanded archive and removed {}",
        archive_path.display()
    );

    Ok(ExpandReport {
        dir,
        entries,
        files,
    })
}

fn io(action: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> ExpandError {
    let path = path.to_path_buf();
    move |source| ExpandError::Io {
        action,
        path,
        source,
    }
}

/// Read errors on the archive file itself stay I/O; everything else is a format problem.
fn zip_error(archive_path: &Path, err: ZipError) -> ExpandError {
    match err {
        ZipError::Io(source) if source.kind() != std::io::ErrorKind::InvalidData => {
            ExpandError::Io {
                action: "read",
                path: archive_path.to_path_buf(),
                source,
            }
        }
        other => ExpandError::Format {
            path: archive_path.to_path_buf(),
            source: other,
        },
    }
}
