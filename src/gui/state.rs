//! Application state for the monitor window
//!
//! Owned by the iced application and only mutated from `update`, so the
//! watcher thread never touches it.

use tracing::{info, warn};

use crate::clipboard::ClipboardSink;
use crate::store::LinkStore;

/// Maximum number of notifications kept on screen
const MAX_MESSAGES: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Collected links and their display log
    pub store: LinkStore,

    /// On-screen notifications (copy results)
    pub messages: Vec<UserMessage>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a link reported by the watcher.
    ///
    /// Returns true if the link was new and appended to the log.
    pub fn insert_link(&mut self, link: &str) -> bool {
        let inserted = self.store.insert(link);
        if inserted {
            info!("New magnet link detected: {}", link);
        }
        inserted
    }

    /// Clear the collected links and the log
    pub fn clear(&mut self) {
        let count = self.store.len();
        self.store.clear();
        info!("Cleared {} magnet link(s)", count);
    }

    /// Write every collected link to `sink`, newline separated.
    ///
    /// Failures become an error notification; the store is never modified.
    pub fn copy_all<S>(&mut self, sink: &mut S) -> bool
    where
        S: ClipboardSink + ?Sized,
    {
        let count = self.store.len();
        match sink.write_text(&self.store.copy_all_text()) {
            Ok(()) => {
                info!("Copied {} magnet link(s) to clipboard", count);
                self.add_message(
                    MessageLevel::Success,
                    format!("Copied {} link(s) to clipboard", count),
                );
                true
            }
            Err(e) => {
                warn!("Copy all failed: {}", e);
                self.add_message(MessageLevel::Error, format!("Could not copy links: {}", e));
                false
            }
        }
    }

    /// Add a user message, dropping the oldest beyond the on-screen limit
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(UserMessage { level, text });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn dismiss_message(&mut self, idx: usize) {
        if idx < self.messages.len() {
            self.messages.remove(idx);
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserMessage {
    pub level: MessageLevel,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Error,
    Success,
}
