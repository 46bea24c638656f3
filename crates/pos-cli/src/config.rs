//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`POS_` prefix, `__` for nesting, e.g.
//!    `POS_CATALOG_PATH`, `POS_OUTPUT__NO_COLOR`)
//! 3. Config file (`--config <path>`, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog file commands run against when `--catalog` is not given.
    /// Absent means the built-in demo catalog, which is a valid setup and
    /// not an error.
    pub catalog_path: Option<PathBuf>,
    /// Output settings.
    pub output: OutputConfig,
    /// Scanner settings.
    pub scanner: ScannerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Prompt shown in interactive scan sessions.
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
            scanner: ScannerConfig {
                prompt: "scan".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config`.  An explicit file must exist; the default location is
    /// optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.clone())),
            None => builder.add_source(File::from(Self::config_path()).required(false)),
        };

        // `prefix_separator` would otherwise default to the nesting
        // separator, demanding `POS__CATALOG_PATH` instead of
        // `POS_CATALOG_PATH`.
        let config = builder
            .add_source(
                Environment::with_prefix("POS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Self>()?;

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pos.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "pos", "pos")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pos.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_catalog_path() {
        assert!(AppConfig::default().catalog_path.is_none());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_prompt_is_scan() {
        assert_eq!(AppConfig::default().scanner.prompt, "scan");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "catalog_path = \"/srv/shop/catalog.toml\"\n\n[scanner]\nprompt = \"bleep\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(
            cfg.catalog_path,
            Some(PathBuf::from("/srv/shop/catalog.toml"))
        );
        assert_eq!(cfg.scanner.prompt, "bleep");
        // Untouched sections keep their defaults.
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
