//! Main iced Application implementation for the magnet monitor
//!
//! Implements the Elm Architecture pattern: State -> View -> Message -> Update -> State

use crossbeam_channel::Receiver;
use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{window, Alignment, Element, Font, Length, Subscription, Task};
use tracing::info;

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::gui::message::Message;
use crate::gui::state::AppState;
use crate::gui::theme as app_theme;
use crate::watcher::{WatchEvent, WatcherHandle};

pub struct MagnetWatchApp {
    pub state: AppState,
    config: Config,
    watcher: WatcherHandle,
    events: Receiver<WatchEvent>,
    clipboard: SystemClipboard,
}

impl MagnetWatchApp {
    pub fn new(
        config: Config,
        watcher: WatcherHandle,
        events: Receiver<WatchEvent>,
    ) -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::new(),
            config,
            watcher,
            events,
            clipboard: SystemClipboard::new(),
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        match self.state.store.len() {
            0 => self.config.ui.title.clone(),
            n => format!("{} ({})", self.config.ui.title, n),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.drain_events();
                Task::none()
            }
            Message::ClearPressed => {
                self.state.clear();
                Task::none()
            }
            Message::CopyAllPressed => {
                self.state.copy_all(&mut self.clipboard);
                Task::none()
            }
            Message::DismissMessage(idx) => {
                self.state.dismiss_message(idx);
                Task::none()
            }
            Message::CloseRequested(_) => {
                info!("Window close requested, stopping watcher");
                self.watcher.stop();
                iced::exit()
            }
        }
    }

    /// Apply every event the watcher has queued since the last tick
    fn drain_events(&mut self) {
        for event in self.events.try_iter() {
            match event {
                WatchEvent::MagnetDetected(link) => {
                    self.state.insert_link(&link);
                }
            }
        }
    }

    /// Render the main view
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_log(),
            self.view_buttons(),
            self.view_messages(),
            self.view_footer(),
        ]
        .spacing(8)
        .padding(10);

        container(content)
            .style(app_theme::background_style)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Scrollable log of collected links, pinned to the newest line
    fn view_log(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = if self.state.store.is_empty() {
            text("Copy a magnet link and it will show up here.")
                .size(12)
                .style(|_theme| text::Style {
                    color: Some(app_theme::colors::TEXT_MUTED),
                })
                .into()
        } else {
            column(
                self.state
                    .store
                    .links()
                    .map(|link| text(link).size(12).font(Font::MONOSPACE).into()),
            )
            .spacing(2)
            .into()
        };

        container(
            scrollable(container(body).padding(6).width(Length::Fill))
                .anchor_bottom()
                .height(Length::Fill),
        )
        .style(app_theme::log_panel_style)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn view_buttons(&self) -> Element<'_, Message> {
        row![
            button(text("Clear"))
                .on_press(Message::ClearPressed)
                .padding([6, 16])
                .style(app_theme::secondary_button_style),
            space().width(Length::Fill),
            button(text("Copy All"))
                .on_press(Message::CopyAllPressed)
                .padding([6, 16])
                .style(app_theme::primary_button_style),
        ]
        .align_y(Alignment::Center)
        .into()
    }

    fn view_messages(&self) -> Element<'_, Message> {
        let banners = self.state.messages.iter().enumerate().map(|(idx, msg)| {
            container(
                row![
                    text(msg.text.as_str()).size(12),
                    space().width(Length::Fill),
                    button(text("x").size(12))
                        .on_press(Message::DismissMessage(idx))
                        .padding([0, 6])
                        .style(app_theme::secondary_button_style),
                ]
                .align_y(Alignment::Center),
            )
            .padding([4, 8])
            .width(Length::Fill)
            .style(app_theme::banner_style(msg.level))
            .into()
        });

        column(banners).spacing(4).into()
    }

    fn view_footer(&self) -> Element<'_, Message> {
        let status = self.watcher.status();
        let running = self.watcher.is_running();

        row![
            text(format!("{} link(s)", self.state.store.len())).size(12),
            space().width(Length::Fill),
            text(status.display_text())
                .size(12)
                .style(move |_theme| text::Style {
                    color: Some(app_theme::status_indicator_color(running)),
                }),
        ]
        .align_y(Alignment::Center)
        .into()
    }

    /// Subscriptions for async events
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            // Watcher events are drained on the UI thread at this rate
            iced::time::every(self.config.refresh_interval()).map(|_| Message::Tick),
            window::close_requests().map(Message::CloseRequested),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardSource;
    use crate::watcher;
    use crossbeam_channel::Sender;
    use std::time::Duration;

    struct EmptyClipboard;

    impl ClipboardSource for EmptyClipboard {
        fn read_text(&mut self) -> crate::clipboard::Result<String> {
            Ok(String::new())
        }
    }

    const A: &str = "magnet:?xt=urn:btih:AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    /// App wired to an idle watcher thread; events are fed through the sender
    fn app_with_watcher() -> (MagnetWatchApp, WatcherHandle, Sender<WatchEvent>) {
        let (watcher_tx, _) = crossbeam_channel::unbounded();
        let handle =
            watcher::spawn(Duration::from_secs(60), || EmptyClipboard, watcher_tx).unwrap();

        let (tx, rx) = crossbeam_channel::unbounded();
        let (app, _) = MagnetWatchApp::new(Config::default_config(), handle.clone(), rx);
        (app, handle, tx)
    }

    #[test]
    fn test_close_request_stops_watcher() {
        let (mut app, handle, _tx) = app_with_watcher();
        assert!(handle.is_running());

        let _ = app.update(Message::CloseRequested(window::Id::unique()));
        assert!(!handle.is_running());
    }

    #[test]
    fn test_tick_drains_events_into_store() {
        let (mut app, handle, tx) = app_with_watcher();
        tx.send(WatchEvent::MagnetDetected(A.to_string())).unwrap();
        tx.send(WatchEvent::MagnetDetected(A.to_string())).unwrap();

        let _ = app.update(Message::Tick);
        assert_eq!(app.state.store.len(), 1);
        assert_eq!(app.title(), "Clipboard Magnet Monitor (1)");

        let _ = app.update(Message::ClearPressed);
        assert!(app.state.store.is_empty());
        assert_eq!(app.title(), "Clipboard Magnet Monitor");
        handle.stop();
    }
}
