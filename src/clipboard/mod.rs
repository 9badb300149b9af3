//! Clipboard access
//!
//! The watcher and the UI only see the clipboard through two small traits:
//!
//! - [`ClipboardSource`] - read the current plain-text contents
//! - [`ClipboardSink`] - replace the contents with plain text
//!
//! [`SystemClipboard`] implements both on top of `arboard`. Tests substitute
//! scripted or mocked implementations.
//!
//! # Data Flow
//!
//! ```text
//! System clipboard ──read_text──> ClipboardWatcher ──MagnetDetected──> UI (LinkStore)
//!                                                                        │
//! System clipboard <──────────────────write_text─────────── "Copy All" ──┘
//! ```

pub mod error;
pub mod system;

pub use error::{ClipboardError, Result};
pub use system::SystemClipboard;

/// Something the current clipboard text can be read from
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSource {
    /// Read the clipboard as plain text.
    ///
    /// An empty clipboard, or one holding only non-text data, yields an
    /// empty string rather than an error.
    fn read_text(&mut self) -> Result<String>;
}

/// Something plain text can be written to
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

impl<T: ClipboardSource + ?Sized> ClipboardSource for Box<T> {
    fn read_text(&mut self) -> Result<String> {
        (**self).read_text()
    }
}

impl<T: ClipboardSink + ?Sized> ClipboardSink for Box<T> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        (**self).write_text(text)
    }
}
