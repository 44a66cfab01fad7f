//! Configuration settings for todofile.
//!
//! Settings are loaded from `~/.todofile/config.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::core::ViewOptions;
use crate::error::TodoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Listing defaults.
    pub list: ListConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Record file used when none is given on the command line.
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the process-wide `colored` switch.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Defaults for the `list` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Sort by priority unless overridden.
    #[serde(default = "default_true")]
    pub sort_by_priority: bool,
    /// Sort by title unless overridden.
    #[serde(default)]
    pub sort_by_title: bool,
}

impl ListConfig {
    /// View options before any command-line overrides.
    #[must_use]
    pub const fn view_options(&self) -> ViewOptions {
        ViewOptions {
            sort_by_priority: self.sort_by_priority,
            sort_by_title: self.sort_by_title,
            level: None,
        }
    }
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_file() -> PathBuf {
    PathBuf::from("TODO")
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            file: default_file(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            sort_by_priority: default_true(),
            sort_by_title: false,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TodoError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TodoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TodoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Load a config file the user named explicitly.
    ///
    /// Same as [`Config::load_from_path`], but a missing file is reported
    /// at warn level before falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_requested(path: &Path) -> Result<Self, TodoError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
        }
        Self::load_from_path(path)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), TodoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TodoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TodoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
