//! `lordd cards` – print raw card previews and the normalized card list.

use anyhow::{Context, Result};
use lordd_core::cards;
use std::path::Path;

pub fn run_cards(path: &Path, preview: usize, json: bool) -> Result<()> {
    let raw = cards::load_records(path)?;

    for record in raw.iter().take(preview) {
        for line in cards::raw_preview(record) {
            println!("{line}");
        }
        println!();
    }

    let normalized = cards::normalize(&raw)
        .with_context(|| format!("normalizing cards from {}", path.display()))?;
    tracing::info!(path = %path.display(), cards = normalized.len(), "normalized cards");

    if json {
        println!("{}", serde_json::to_string_pretty(&normalized)?);
    } else {
        for card in &normalized {
            println!("{:?}", card);
        }
    }
    Ok(())
}
