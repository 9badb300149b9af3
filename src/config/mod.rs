//! Configuration management
//!
//! Handles loading, validation, and merging of configuration from:
//! - TOML files
//! - CLI arguments
//!
//! Every section is optional in the file; missing keys take their defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod types;

pub use types::{LoggingConfig, UiConfig, WatcherConfig};

/// Directory name used under the user's config directory
const APP_DIR: &str = "magnet-watch";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Clipboard watcher configuration
    pub watcher: WatcherConfig,
    /// Window configuration
    pub ui: UiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Default config file location
    ///
    /// `$XDG_CONFIG_HOME/magnet-watch/config.toml` (or the platform
    /// equivalent), falling back to the working directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(50..=60_000).contains(&self.watcher.poll_interval_ms) {
            anyhow::bail!(
                "poll_interval_ms must be between 50 and 60000, got {}",
                self.watcher.poll_interval_ms
            );
        }

        if !(10..=5_000).contains(&self.ui.refresh_ms) {
            anyhow::bail!(
                "refresh_ms must be between 10 and 5000, got {}",
                self.ui.refresh_ms
            );
        }

        let (width, height) = (self.ui.window_width, self.ui.window_height);
        if !width.is_finite() || !height.is_finite() {
            anyhow::bail!("Window size {}x{} is not a finite number", width, height);
        }
        if width < 100.0 || height < 100.0 {
            anyhow::bail!(
                "Window size {}x{} is too small (minimum 100x100)",
                width,
                height
            );
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Invalid log level: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            _ => anyhow::bail!("Invalid log format: {}", self.logging.format),
        }

        Ok(())
    }

    /// Override config with CLI arguments
    pub fn with_overrides(
        mut self,
        poll_interval_ms: Option<u64>,
        log_format: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(ms) = poll_interval_ms {
            self.watcher.poll_interval_ms = ms;
        }
        if let Some(format) = log_format {
            self.logging.format = format;
        }
        if log_file.is_some() {
            self.logging.log_file = log_file;
        }
        self
    }

    /// Watcher poll interval
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.watcher.poll_interval_ms)
    }

    /// UI drain interval
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.ui.refresh_ms)
    }
}
