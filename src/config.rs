//! Wayfare configuration.
//!
//! Loaded from `~/.wayfare/config.toml`. Every key is optional and a
//! missing file means defaults:
//!
//! ```toml
//! default-travelers = 2
//! output = "trip-itinerary.txt"
//!
//! [page]
//! threshold = 270
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::export::{DEFAULT_FILE_NAME, PageGeometry};

/// Wayfare configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Travelers assumed when `--travelers` is not given.
    pub default_travelers: u32,

    /// Where `export` writes when `--out` is not given.
    pub output: PathBuf,

    /// Page layout for exported documents.
    pub page: PageGeometry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_travelers: 1,
            output: PathBuf::from(DEFAULT_FILE_NAME),
            page: PageGeometry::default(),
        }
    }
}

impl Config {
    /// Load config from `~/.wayfare/config.toml`, falling back to defaults.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        if config.default_travelers == 0 {
            return Err(format!(
                "default-travelers must be at least 1 in {}",
                path.display()
            ));
        }
        config
            .page
            .validate()
            .map_err(|e| format!("invalid [page] in {}: {e}", path.display()))?;

        Ok(config)
    }

    /// The config file path: `~/.wayfare/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".wayfare").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_dir, path) = write_config("default-travelers = 3\n\n[page]\nthreshold = 120\n");
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.default_travelers, 3);
        assert_eq!(config.output, PathBuf::from("trip-itinerary.txt"));
        assert_eq!(config.page.threshold, 120);
        assert_eq!(config.page.top_margin, 10);
        assert_eq!(config.page.line_height, 10);
    }

    #[test]
    fn zero_travelers_rejected() {
        let (_dir, path) = write_config("default-travelers = 0\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.contains("default-travelers"));
    }

    #[test]
    fn zero_line_height_rejected() {
        let (_dir, path) = write_config("[page]\nline-height = 0\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.contains("line-height"));
    }

    #[test]
    fn threshold_above_top_margin_required() {
        let (_dir, path) = write_config("[page]\ntop-margin = 20\nthreshold = 10\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.contains("threshold"));
    }

    #[test]
    fn overflowing_section_gap_rejected() {
        let (_dir, path) = write_config("[page]\nsection-gap = 4294967295\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.starts_with("invalid [page]"));
    }

    #[test]
    fn invalid_toml_names_the_path() {
        let (_dir, path) = write_config("default-travelers = \"many\"\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.starts_with("invalid config at"));
    }
}
