//! System clipboard backed by `arboard`
//!
//! The underlying handle is opened lazily and dropped after any failure so
//! that the next call starts from a fresh connection. Only the first of a run
//! of failed opens is logged at warn level; the watcher retries every tick.

use arboard::Clipboard;
use tracing::{debug, info, warn};

use super::error::{ClipboardError, Result};
use super::{ClipboardSink, ClipboardSource};

/// Platform clipboard
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
    /// Consecutive failed attempts to open the clipboard
    open_failures: u32,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .field("open_failures", &self.open_failures)
            .finish()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard> {
        if self.handle.is_none() {
            let clipboard = Clipboard::new().map_err(|e| {
                if self.record_open_failure() {
                    warn!("Failed to open system clipboard: {}", e);
                } else {
                    debug!(
                        "Failed to open system clipboard ({} attempts): {}",
                        self.open_failures, e
                    );
                }
                ClipboardError::Unavailable(e.to_string())
            })?;
            self.record_opened();
            self.handle = Some(clipboard);
        }

        self.handle
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }

    /// Count a failed open. Returns true for the first failure of a run.
    fn record_open_failure(&mut self) -> bool {
        self.open_failures = self.open_failures.saturating_add(1);
        self.open_failures == 1
    }

    fn record_opened(&mut self) {
        if self.open_failures > 0 {
            info!(
                "System clipboard available after {} failed attempt(s)",
                self.open_failures
            );
        } else {
            debug!("System clipboard opened");
        }
        self.open_failures = 0;
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        let result = self.handle()?.get_text();
        match result {
            Ok(text) => Ok(text),
            // Images, files, or nothing at all
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => {
                self.handle = None;
                Err(e.into())
            }
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let result = self.handle()?.set_text(text);
        result.map_err(|e| {
            self.handle = None;
            ClipboardError::WriteFailed(e.to_string())
        })
    }
}
