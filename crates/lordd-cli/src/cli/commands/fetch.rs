//! `lordd fetch` – download and expand set archives.

use anyhow::{Context, Result};
use lordd_core::config::LorddConfig;
use lordd_core::fetch::FetchOptions;
use lordd_core::pipeline;
use std::path::Path;
use std::time::Duration;

use crate::cli::progress::DownloadBar;

pub fn run_fetch(cfg: &LorddConfig, folder: &Path, sets: &[u32]) -> Result<()> {
    let sources = if sets.is_empty() {
        cfg.sources()
    } else {
        cfg.sources_for(sets)
    };
    if sources.is_empty() {
        println!("No sets configured.");
        return Ok(());
    }
    let options = FetchOptions {
        connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
    };

    let prepared = pipeline::prepare_sets(&sources, folder, &options, |source| {
        Box::new(DownloadBar::new(&source.label()))
    })
    .with_context(|| format!("preparing sets in {}", folder.display()))?;

    for set in &prepared {
        println!(
            "{} -> {} ({} entries)",
            set.source.label(),
            set.dir.display(),
            set.entries
        );
    }
    Ok(())
}
