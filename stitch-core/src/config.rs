//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages the user-editable settings for stitch. Loads and saves settings as
//! TOML from the proper cross-platform config path using the
//! [`directories`](https://docs.rs/directories) crate.
//!
//! ## Features
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Missing file: defaults are written back so the user has a template
//! - Command-line overrides applied on top via [`Config::apply_overrides`]
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load()?;
//! config.save()?;
//! ```

use std::{fs, path::PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "stitch";
const APPLICATION: &str = "stitch";

/// Main configuration struct for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// List dot-files alongside everything else.
    pub show_hidden: bool,

    /// How many leading bytes the text probe inspects.
    pub probe_bytes: usize,

    /// Prefix for generated output names: `<prefix>_<timestamp>.txt`.
    pub output_prefix: String,

    /// `chrono` format string for the timestamp part.
    pub timestamp_format: String,

    /// Fixed output file name; relative names land in the current directory.
    pub output_name: Option<String>,

    /// Default tracing level when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_hidden: true,
            probe_bytes: 4096,
            output_prefix: "concatenated".to_string(),
            timestamp_format: "%Y%m%d_%H%M%S".to_string(),
            output_name: None,
            log_level: "info".to_string(),
        }
    }
}

/// Values from the command line that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output_name: Option<String>,
    pub log_level: Option<String>,
    pub hide_hidden: bool,
}

impl Config {
    /// Loads config from the TOML file at the app config dir, or returns defaults.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/stitch/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        Ok(Self::load_from(&path)?)
    }

    /// Loads from an explicit path; writes defaults there if nothing exists yet.
    pub fn load_from(path: &std::path::Path) -> Result<Self, AppError> {
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = fs::read_to_string(path).map_err(|e| AppError::config_io(path, e))?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path)?;

            Ok(default_config)
        }
    }

    /// Saves config to the TOML file at the app config dir.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;
        Ok(self.save_to(&path)?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str).map_err(|e| AppError::config_io(path, e))?;

        Ok(())
    }

    /// Command-line values replace their config counterparts.
    #[must_use]
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(name) = overrides.output_name {
            self.output_name = Some(name);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if overrides.hide_hidden {
            self.show_hidden = false;
        }
        self
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Directory for rolling log files.
    pub fn log_dir() -> anyhow::Result<PathBuf> {
        Ok(Self::project_dirs()?.data_local_dir().join("logs"))
    }

    fn project_dirs() -> anyhow::Result<ProjectDirs> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))
    }
}
