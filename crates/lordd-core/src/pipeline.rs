//! Sequential download-and-expand of card sets.
//!
//! Sources are processed strictly in the given order; the first failure is
//! returned and the remaining sources are not attempted.

use std::path::{Path, PathBuf};

use crate::archive::{self, ExpandError};
use crate::fetch::{self, DownloadTask, FetchOptions, ProgressSink, TransferError};
use crate::url_model::{SetSource, ARCHIVE_EXTENSION};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("set {id}: download failed: {source}")]
    Fetch {
        id: u32,
        #[source]
        source: TransferError,
    },
    #[error("set {id}: expand failed: {source}")]
    Expand {
        id: u32,
        #[source]
        source: ExpandError,
    },
}

/// A set that was downloaded and expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSet {
    pub source: SetSource,
    /// Extraction directory (`folder/set{n}-{locale}`).
    pub dir: PathBuf,
    /// Entries extracted from the archive.
    pub entries: usize,
}

/// Downloads one set archive into `folder`, expands it and removes the archive.
pub fn prepare_set(
    source: &SetSource,
    folder: &Path,
    options: &FetchOptions,
    progress: &mut dyn ProgressSink,
) -> Result<PreparedSet, PipelineError> {
    tracing::info!(set = source.id, url = %source.url, "fetching set");
    let task = DownloadTask::new(
        source.url.clone(),
        source.name.clone(),
        ARCHIVE_EXTENSION,
        folder,
    );
    let archive_path = fetch::fetch(&task, options, progress).map_err(|source_err| {
        PipelineError::Fetch {
            id: source.id,
            source: source_err,
        }
    })?;
    let report = archive::expand_with_report(&archive_path).map_err(|source_err| {
        PipelineError::Expand {
            id: source.id,
            source: source_err,
        }
    })?;
    Ok(PreparedSet {
        source: source.clone(),
        dir: report.dir,
        entries: report.entries,
    })
}

/// Runs [`prepare_set`] for every source in order. `progress_for` is called once
/// per source to obtain that download's progress sink.
pub fn prepare_sets<'s, F>(
    sources: &[SetSource],
    folder: &Path,
    options: &FetchOptions,
    mut progress_for: F,
) -> Result<Vec<PreparedSet>, PipelineError>
where
    F: FnMut(&SetSource) -> Box<dyn ProgressSink + 's>,
{
    let mut prepared = Vec::with_capacity(sources.len());
    for source in sources {
        let mut sink = progress_for(source);
        let set = prepare_set(source, folder, options, sink.as_mut())?;
        prepared.push(set);
    }
    tracing::info!(sets = prepared.len(), folder = %folder.display(), "all sets prepared");
    Ok(prepared)
}
