//! User configuration
//!
//! Loaded from `~/.config/termsaver/config.toml` (platform equivalent
//! via `dirs`). Every field has a default, so a missing or partial file
//! is fine:
//!
//! ```toml
//! theme = "ocean"
//! tick_rate_ms = 33
//!
//! [breakpoints]
//! mobile = 768
//! tablet = 1024
//! tablet_max = 2
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::layout::Breakpoints;

/// Default render loop tick rate (~30fps).
pub const DEFAULT_TICK_RATE_MS: u64 = 33;

/// Top-level user configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name: "ocean", "matrix", or "classic"
    pub theme: String,
    /// Event loop poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Responsive visibility breakpoints
    pub breakpoints: Breakpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "ocean".to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl Config {
    /// Path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine config directory")?;
        Ok(base.join("termsaver").join("config.toml"))
    }

    /// Load the config file, falling back to defaults if it is missing.
    ///
    /// A malformed file is an error rather than silently ignored - the
    /// user asked for specific settings and should hear when they are
    /// not being applied.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Write the config to its default location, creating directories.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
