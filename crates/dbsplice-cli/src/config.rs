//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it — the marker token
//! reaches the engine as a validated `Separator` value.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the platform config dir)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Marker token that introduces each embedded file, including any
    /// trailing space.
    pub marker: String,
    /// Name of the folder that holds one subfolder per database schema.
    pub db_folder: String,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            marker: "-- File: ".into(),
            db_folder: "db".into(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location).  A missing file is not an error — the
    /// built-in defaults apply; a present but unparseable file is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dbsplice.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "dbsplice", "dbsplice")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".dbsplice.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_marker_token() {
        assert_eq!(AppConfig::default().marker, "-- File: ");
    }

    #[test]
    fn default_db_folder() {
        assert_eq!(AppConfig::default().db_folder, "db");
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(Some(&PathBuf::from("/definitely/not/here.toml"))).unwrap();
        assert_eq!(cfg.marker, "-- File: ");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let cfg: AppConfig = toml::from_str("marker = \"-- Source: \"").unwrap();
        assert_eq!(cfg.marker, "-- Source: ");
        assert_eq!(cfg.db_folder, "db");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
