//! Configuration file handling for blockview.
//!
//! Loads configuration from `<config dir>/blockview/config.toml` or a custom path,
//! and holds the immutable [`RenderConfig`] built from it and the CLI flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How encoded frames reach the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputPath {
    /// Write the UTF-8 bytes straight to the output stream in one call.
    #[default]
    Raw,
    /// Go through a buffered text writer.
    Buffered,
}

/// Render settings, fixed before the first frame and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Draw the stats banner above the image.
    pub info_bar: bool,
    /// Stretch every frame to the terminal and repaint in place.
    pub auto_resize: bool,
    pub output_path: OutputPath,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            info_bar: true,
            auto_resize: false,
            output_path: OutputPath::Raw,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub capture: CaptureSection,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderSection {
    #[serde(default = "default_true")]
    pub info_bar: bool,
    #[serde(default)]
    pub default_print: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            info_bar: true,
            default_print: false,
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct CaptureSection {
    #[serde(default)]
    pub cursor: bool,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("blockview").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/blockview/config.toml")
        })
}
