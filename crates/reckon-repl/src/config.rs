//! REPL configuration.
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/reckon/config.toml` on Linux). Every field is optional:
//!
//! ```toml
//! banner = true        # ASCII calculator at startup
//! color = true         # colour output when stdout is a terminal
//! log = "reckon=debug" # default log filter when RUST_LOG is unset
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

/// Settings for the interactive front-end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Print the ASCII-art banner at startup.
    pub banner: bool,
    /// Colour diagnostics and results.
    pub color: bool,
    /// Log filter directive used when `RUST_LOG` is not set.
    pub log: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            banner: true,
            color: true,
            log: None,
        }
    }
}

impl ReplConfig {
    /// Load from the default location, falling back to defaults when
    /// there is no config file.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Where the config file lives on this platform, if anywhere.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "reckon").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        Self::from_toml_str(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Parse configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse reckon config")
    }
}
