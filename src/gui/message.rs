//! GUI Message types
//!
//! All user interactions and periodic events are represented as messages.

use iced::window;

/// Main application message type
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick: drain pending watcher events
    Tick,
    /// "Clear" button pressed
    ClearPressed,
    /// "Copy All" button pressed
    CopyAllPressed,
    /// Dismiss a notification by index
    DismissMessage(usize),
    /// The user asked to close the window
    CloseRequested(window::Id),
}
