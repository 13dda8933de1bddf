//! Set source modeling: URL template and local names for each card set.
//!
//! A set is published as `{base_url}/set{id}-{locale}.zip` and saved locally
//! under the same base name (`set{id}-{locale}`).

mod path;

pub use path::filename_from_url_path;

/// Data dragon root for the latest release of every set.
pub const DEFAULT_BASE_URL: &str = "https://dd.b.pvp.net/latest";

/// Locale suffix used in archive names.
pub const DEFAULT_LOCALE: &str = "en_us";

/// Extension of published set archives.
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// One downloadable card set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSource {
    /// Set number (1-based).
    pub id: u32,
    /// Full archive URL.
    pub url: String,
    /// Local base name, without extension.
    pub name: String,
}

impl SetSource {
    pub fn new(base_url: &str, id: u32, locale: &str) -> Self {
        Self {
            id,
            url: set_url(base_url, id, locale),
            name: set_name(id, locale),
        }
    }

    /// Short label for progress display: the archive file name from the URL,
    /// or the local name when the URL has no usable path.
    pub fn label(&self) -> String {
        filename_from_url_path(&self.url).unwrap_or_else(|| self.name.clone())
    }
}

/// Local base name of a set: `set{id}-{locale}`.
pub fn set_name(id: u32, locale: &str) -> String {
    format!("set{}-{}", id, locale)
}

/// Archive URL of a set under `base_url` (a trailing `/` is ignored).
pub fn set_url(base_url: &str, id: u32, locale: &str) -> String {
    format!(
        "{}/{}{}",
        base_url.trim_end_matches('/'),
        set_name(id, locale),
        ARCHIVE_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_url_default_template() {
        assert_eq!(
            set_url(DEFAULT_BASE_URL, 1, DEFAULT_LOCALE),
            "https://dd.b.pvp.net/latest/set1-en_us.zip"
        );
        assert_eq!(
            set_url("https://dd.b.pvp.net/latest/", 3, "en_us"),
            "https://dd.b.pvp.net/latest/set3-en_us.zip"
        );
    }

    #[test]
    fn set_source_names() {
        let src = SetSource::new(DEFAULT_BASE_URL, 2, "fr_fr");
        assert_eq!(src.id, 2);
        assert_eq!(src.name, "set2-fr_fr");
        assert_eq!(src.url, "https://dd.b.pvp.net/latest/set2-fr_fr.zip");
        assert_eq!(src.label(), "set2-fr_fr.zip");
    }

    #[test]
    fn label_falls_back_to_name() {
        let src = SetSource {
            id: 1,
            url: "not a url".to_string(),
            name: "set1-en_us".to_string(),
        };
        assert_eq!(src.label(), "set1-en_us");
    }
}
