use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::{self, SetSource};

/// Global configuration loaded from `~/.config/lordd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LorddConfig {
    /// Root URL the set archives are published under.
    pub base_url: String,
    /// Locale suffix of the archives (e.g. "en_us").
    pub locale: String,
    /// Set numbers to download, in order.
    pub sets: Vec<u32>,
    /// Folder archives are downloaded to and expanded in.
    pub output_dir: PathBuf,
    /// Connect timeout in seconds for set downloads (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for LorddConfig {
    fn default() -> Self {
        Self {
            base_url: url_model::DEFAULT_BASE_URL.to_string(),
            locale: url_model::DEFAULT_LOCALE.to_string(),
            sets: vec![1, 2, 3],
            output_dir: PathBuf::from("./sets"),
            connect_timeout_secs: None,
        }
    }
}

impl LorddConfig {
    /// Sources for every configured set, in configured order.
    pub fn sources(&self) -> Vec<SetSource> {
        self.sources_for(&self.sets)
    }

    /// Sources for the given set numbers using this config's URL and locale.
    pub fn sources_for(&self, sets: &[u32]) -> Vec<SetSource> {
        sets.iter()
            .map(|&id| SetSource::new(&self.base_url, id, &self.locale))
            .collect()
    }

    /// Path of the card JSON inside an expanded set, relative to `output_dir`:
    /// `{output_dir}/set{n}-{locale}/{locale}/data/set{n}-{locale}.json`.
    pub fn card_data_path(&self, set: u32) -> PathBuf {
        card_data_path(&self.output_dir, set, &self.locale)
    }
}

/// See [`LorddConfig::card_data_path`].
pub fn card_data_path(output_dir: &Path, set: u32, locale: &str) -> PathBuf {
    let name = url_model::set_name(set, locale);
    output_dir
        .join(&name)
        .join(locale)
        .join("data")
        .join(format!("{}.json", name))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lordd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LorddConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LorddConfig> {
    if !path.exists() {
        let default_cfg = LorddConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: LorddConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
