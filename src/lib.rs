//! # magnet-watch
//!
//! Watches the system clipboard and collects BitTorrent magnet links.
//!
//! # Architecture
//!
//! ```text
//! magnet-watch
//!   ├─> Clipboard Watcher (background thread, polls once per interval)
//!   │     └─> crossbeam channel ──> UI tick (iced) or headless loop
//!   ├─> Link Store (deduplicated links + display log, UI-owned)
//!   └─> System Clipboard (arboard, read by the watcher, written by "Copy All")
//! ```
//!
//! # Data Flow
//!
//! **Detection:** Clipboard → Watcher (changed? magnet?) → channel → Store → Display
//!
//! **Copy All:** Store → newline-joined text → Clipboard

#![warn(clippy::all)]

/// Clipboard access traits and the arboard-backed implementation
pub mod clipboard;

/// Configuration loading and validation
pub mod config;

/// Windowless mode printing links to stdout
pub mod headless;

/// Magnet link pattern matching
pub mod magnet;

/// Deduplicating link store
pub mod store;

/// Background clipboard polling
pub mod watcher;

/// Desktop window (requires the `gui` feature)
#[cfg(feature = "gui")]
pub mod gui;

pub use clipboard::{ClipboardError, ClipboardSink, ClipboardSource, SystemClipboard};
pub use config::Config;
pub use magnet::is_magnet_link;
pub use store::LinkStore;
pub use watcher::{ClipboardWatcher, WatchEvent, WatcherHandle, WatcherStatus};
