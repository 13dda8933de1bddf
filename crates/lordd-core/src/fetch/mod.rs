//! Single-attempt HTTP GET of a set archive to a local file.
//!
//! Uses the curl crate (libcurl) in the calling thread. The body is streamed
//! to `folder/name.extension` and a [`Progress`] event is emitted per chunk,
//! with the total taken from `Content-Length` when the server sends it.
//! A failed transfer may leave a partial file behind.

mod error;
mod headers;
mod progress;

pub use error::TransferError;
pub use progress::{NoProgress, Progress, ProgressSink};

use headers::{classify_header_line, HeaderLine};
use std::cell::Cell;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::str;
use std::time::Duration;

/// One download: where from, and where to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub url: String,
    /// Local base name, without extension.
    pub name: String,
    /// Extension, with or without the leading dot (".zip" or "zip"). May be empty.
    pub extension: String,
    pub folder: PathBuf,
}

impl DownloadTask {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        extension: impl Into<String>,
        folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            extension: extension.into(),
            folder: folder.into(),
        }
    }

    /// `folder/name.extension`.
    pub fn local_path(&self) -> PathBuf {
        let ext = self.extension.trim_start_matches('.');
        let file_name = if ext.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, ext)
        };
        self.folder.join(file_name)
    }
}

/// Transport options for [`fetch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Connect timeout; None leaves libcurl's default. There is no overall transfer timeout.
    pub connect_timeout: Option<Duration>,
}

/// Downloads `task.url` into `task.local_path()`, creating `task.folder` if needed.
/// Returns the local path on success.
pub fn fetch(
    task: &DownloadTask,
    options: &FetchOptions,
    progress: &mut dyn ProgressSink,
) -> Result<PathBuf, TransferError> {
    let path = task.local_path();
    let curl_err = |source: curl::Error| TransferError::Curl {
        url: task.url.clone(),
        source,
    };

    fs::create_dir_all(&task.folder).map_err(|source| TransferError::Io {
        path: task.folder.clone(),
        source,
    })?;
    let mut file = File::create(&path).map_err(|source| TransferError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(url = %task.url, path = %path.display(), "starting download");

    let mut easy = curl::easy::Easy::new();
    easy.url(&task.url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    easy.useragent(concat!("lordd/", env!("CARGO_PKG_VERSION")))
        .map_err(curl_err)?;
    if let Some(timeout) = options.connect_timeout {
        easy.connect_timeout(timeout).map_err(curl_err)?;
    }

    let total: Cell<Option<u64>> = Cell::new(None);
    let written = Cell::new(0u64);
    let mut write_failure: Option<std::io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(line) = str::from_utf8(data) {
                    match classify_header_line(line) {
                        HeaderLine::Status => total.set(None),
                        HeaderLine::ContentLength(n) => total.set(Some(n)),
                        HeaderLine::Other => {}
                    }
                }
                true
            })
            .map_err(curl_err)?;
        transfer
            .write_function(|data| {
                if let Err(e) = file.write_all(data) {
                    write_failure = Some(e);
                    return Ok(0); // abort transfer
                }
                let so_far = written.get() + data.len() as u64;
                written.set(so_far);
                progress.on_progress(Progress {
                    bytes_so_far: so_far,
                    total: total.get(),
                });
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform()
    };

    if let Some(source) = write_failure {
        tracing::warn!(path = %path.display(), "download write failed: {}", source);
        return Err(TransferError::Io { path, source });
    }
    if let Err(source) = performed {
        tracing::warn!(url = %task.url, "download failed: {}", source);
        return Err(curl_err(source));
    }

    let code = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&code) {
        tracing::warn!(url = %task.url, code, "download returned non-success status");
        return Err(TransferError::Http {
            url: task.url.clone(),
            code,
        });
    }

    file.flush().map_err(|source| TransferError::Io {
        path: path.clone(),
        source,
    })?;
    let last = Progress {
        bytes_so_far: written.get(),
        total: total.get(),
    };
    progress.on_finish(last);
    tracing::info!(
        url = %task.url,
        bytes = last.bytes_so_far,
        path = %path.display(),
        "download complete"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_path_with_dotted_extension() {
        let task = DownloadTask::new("https://x/set1-en_us.zip", "set1-en_us", ".zip", "./sets");
        assert_eq!(task.local_path(), PathBuf::from("./sets/set1-en_us.zip"));
    }

    #[test]
    fn local_path_with_bare_extension() {
        let task = DownloadTask::new("https://x/a", "a", "zip", "/tmp");
        assert_eq!(task.local_path(), PathBuf::from("/tmp/a.zip"));
    }

    #[test]
    fn local_path_without_extension() {
        let task = DownloadTask::new("https://x/a", "a", "", "/tmp");
        assert_eq!(task.local_path(), PathBuf::from("/tmp/a"));
    }
}
