//! Monitor window built on iced's Elm Architecture.
//!
//! The watcher thread is started by the caller; the window only drains its
//! event channel on a timer and owns all display state.

pub mod app;
pub mod message;
pub mod state;
pub mod theme;

use crossbeam_channel::Receiver;
use iced::{window, Size};

use crate::config::Config;
use crate::gui::app::MagnetWatchApp;
use crate::watcher::{WatchEvent, WatcherHandle};

/// Open the window and block until it is closed.
pub fn run(config: Config, watcher: WatcherHandle, events: Receiver<WatchEvent>) -> iced::Result {
    // Closing is handled in `update` so the watcher is stopped first
    let settings = window::Settings {
        size: Size::new(config.ui.window_width, config.ui.window_height),
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application(
        move || MagnetWatchApp::new(config.clone(), watcher.clone(), events.clone()),
        MagnetWatchApp::update,
        MagnetWatchApp::view,
    )
    .title(MagnetWatchApp::title)
    .window(settings)
    .centered()
    .subscription(MagnetWatchApp::subscription)
    .run()
}
