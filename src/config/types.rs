//! Configuration type definitions

use serde::Deserialize;
use std::path::PathBuf;

/// Clipboard watcher configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WatcherConfig {
    /// Time between clipboard polls in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Window title
    pub title: String,

    /// Initial window width in logical pixels
    pub window_width: f32,

    /// Initial window height in logical pixels
    pub window_height: f32,

    /// How often the window drains watcher events, in milliseconds
    pub refresh_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Clipboard Magnet Monitor".to_string(),
            window_width: 400.0,
            window_height: 300.0,
            refresh_ms: 200,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    pub level: String,

    /// Console format ("pretty", "compact", "json")
    pub format: String,

    /// Also write logs to this file
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            log_file: None,
        }
    }
}
