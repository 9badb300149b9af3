//! Clipboard Error Types

use thiserror::Error;

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Clipboard access errors
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// Reading text from the clipboard failed
    #[error("Clipboard read failed: {0}")]
    ReadFailed(String),

    /// Writing text to the clipboard failed
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),

    /// Clipboard is held by another process
    #[error("Clipboard is occupied by another application")]
    Occupied,
}

impl ClipboardError {
    /// Whether the same operation may succeed if retried on the next tick.
    ///
    /// Every variant is retried by the watcher; this only controls log level.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClipboardError::Occupied | ClipboardError::ReadFailed(_))
    }
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ClipboardOccupied => ClipboardError::Occupied,
            arboard::Error::ClipboardNotSupported => {
                ClipboardError::Unavailable("clipboard not supported on this platform".to_string())
            }
            other => ClipboardError::ReadFailed(other.to_string()),
        }
    }
}
