//! Clipboard watcher
//!
//! Polls a [`ClipboardSource`] on a dedicated thread and reports clipboard
//! values that look like magnet links. The watcher never touches UI state:
//! every candidate is sent over a channel and the receiving side decides
//! whether it is new.
//!
//! # Lifecycle
//!
//! ```text
//! spawn() ──> Running ──stop() / receiver dropped──> Stopped
//! ```
//!
//! The thread is never joined. `stop()` clears the running flag and unparks
//! the thread so it exits without waiting out the rest of its sleep.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, Thread};
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use tracing::{debug, info, trace, warn};

use crate::clipboard::ClipboardSource;
use crate::magnet::is_magnet_link;

/// Events emitted by the watcher thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// The clipboard changed to a magnet link
    MagnetDetected(String),
}

/// Watcher state as seen from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherStatus {
    Running,
    Stopped,
}

impl WatcherStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            WatcherStatus::Running => "Watching clipboard",
            WatcherStatus::Stopped => "Stopped",
        }
    }
}

/// Change detection and classification for one clipboard.
///
/// Holds the last observed clipboard value; `None` until the first poll.
#[derive(Debug, Default)]
pub struct ClipboardWatcher {
    last_seen: Option<String>,
}

impl ClipboardWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last clipboard value observed by [`poll`](Self::poll)
    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Run one poll tick.
    ///
    /// Returns the clipboard text when it changed since the previous tick and
    /// is a magnet link. Read failures count as an empty clipboard.
    pub fn poll<S>(&mut self, source: &mut S) -> Option<String>
    where
        S: ClipboardSource + ?Sized,
    {
        let current = match source.read_text() {
            Ok(text) => text,
            Err(e) if e.is_transient() => {
                trace!("Clipboard read failed: {}", e);
                String::new()
            }
            Err(e) => {
                debug!("Clipboard read failed: {}", e);
                String::new()
            }
        };

        if self.last_seen.as_deref() == Some(current.as_str()) {
            return None;
        }

        let is_magnet = is_magnet_link(&current);
        self.last_seen = Some(current);

        if is_magnet {
            self.last_seen.clone()
        } else {
            None
        }
    }
}

/// Control handle for a running watcher thread.
///
/// Cloning the handle does not start another thread; all clones control the
/// same watcher.
#[derive(Debug, Clone)]
pub struct WatcherHandle {
    running: Arc<AtomicBool>,
    thread: Thread,
}

impl WatcherHandle {
    /// Ask the watcher to stop. Returns immediately.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            debug!("Stopping clipboard watcher");
        }
        self.thread.unpark();
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> WatcherStatus {
        if self.is_running() {
            WatcherStatus::Running
        } else {
            WatcherStatus::Stopped
        }
    }
}

/// Start polling on a new thread.
///
/// `make_source` runs on the watcher thread, so the source itself does not
/// need to be `Send`. The loop ends when the handle is stopped or when the
/// receiving end of `events` is dropped.
pub fn spawn<S, F>(
    interval: Duration,
    make_source: F,
    events: Sender<WatchEvent>,
) -> std::io::Result<WatcherHandle>
where
    S: ClipboardSource,
    F: FnOnce() -> S + Send + 'static,
{
    let running = Arc::new(AtomicBool::new(true));
    let thread_running = Arc::clone(&running);

    let join = thread::Builder::new()
        .name("clipboard-watcher".to_string())
        .spawn(move || {
            info!("Clipboard watcher started with {:?} interval", interval);
            let mut source = make_source();
            let mut watcher = ClipboardWatcher::new();

            while thread_running.load(Ordering::SeqCst) {
                if let Some(link) = watcher.poll(&mut source) {
                    debug!("Magnet link on clipboard: {}", link);
                    if events.send(WatchEvent::MagnetDetected(link)).is_err() {
                        warn!("Watch event receiver dropped, stopping watcher");
                        break;
                    }
                }

                sleep_until_next_tick(&thread_running, interval);
            }

            thread_running.store(false, Ordering::SeqCst);
            info!("Clipboard watcher stopped");
        })?;

    Ok(WatcherHandle {
        running,
        thread: join.thread().clone(),
    })
}

/// Sleep for `interval`, waking early if the watcher is stopped.
fn sleep_until_next_tick(running: &AtomicBool, interval: Duration) {
    let deadline = Instant::now() + interval;
    while running.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        // Spurious wakeups just loop around
        thread::park_timeout(deadline - now);
    }
}
