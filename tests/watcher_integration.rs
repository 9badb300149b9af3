use std::collections::VecDeque;
use std::time::Duration;

use magnet_watch::clipboard::{ClipboardError, ClipboardSource, Result};
use magnet_watch::headless::collect_events;
use magnet_watch::{watcher, ClipboardWatcher, LinkStore, WatchEvent};

const MAGNET_A: &str = "magnet:?xt=urn:btih:AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Clipboard that yields a fixed sequence of values, then stays on the last one
struct SequenceClipboard {
    values: VecDeque<Option<String>>,
    current: String,
}

impl SequenceClipboard {
    fn new(values: &[Option<&str>]) -> Self {
        Self {
            values: values.iter().map(|v| v.map(str::to_string)).collect(),
            current: String::new(),
        }
    }
}

impl ClipboardSource for SequenceClipboard {
    fn read_text(&mut self) -> Result<String> {
        match self.values.pop_front() {
            Some(Some(text)) => {
                self.current = text;
                Ok(self.current.clone())
            }
            Some(None) => Err(ClipboardError::Unavailable("display gone".to_string())),
            None => Ok(self.current.clone()),
        }
    }
}

#[test]
fn test_four_tick_scenario_stores_one_link() {
    let mut clipboard = SequenceClipboard::new(&[
        Some("hello"),
        Some(MAGNET_A),
        Some(MAGNET_A),
        Some("world"),
    ]);
    let mut watcher = ClipboardWatcher::new();
    let mut store = LinkStore::new();

    for _ in 0..4 {
        if let Some(link) = watcher.poll(&mut clipboard) {
            store.insert(link);
        }
    }

    assert_eq!(store.len(), 1);
    assert_eq!(store.links().collect::<Vec<_>>(), vec![MAGNET_A]);
    assert_eq!(store.display_text(), format!("{}\n", MAGNET_A));
}

#[test]
fn test_link_with_name_and_tracker_is_collected() {
    let link = format!(
        "{}&dn=ubuntu-24.04-desktop-amd64.iso&tr=udp%3A%2F%2Ftracker.example.org%3A1337",
        MAGNET_A
    );
    let longer_hash = format!("{}B&dn=file", MAGNET_A);
    let mut clipboard = SequenceClipboard::new(&[Some(link.as_str()), Some(longer_hash.as_str())]);
    let mut watcher = ClipboardWatcher::new();
    let mut store = LinkStore::new();

    for _ in 0..3 {
        if let Some(found) = watcher.poll(&mut clipboard) {
            store.insert(found);
        }
    }

    assert_eq!(store.links().collect::<Vec<_>>(), vec![link.as_str()]);
}

#[test]
fn test_short_hash_is_never_inserted() {
    let mut clipboard = SequenceClipboard::new(&[Some("magnet:?xt=urn:btih:ZZZ")]);
    let mut watcher = ClipboardWatcher::new();
    let mut store = LinkStore::new();

    for _ in 0..3 {
        if let Some(link) = watcher.poll(&mut clipboard) {
            store.insert(link);
        }
    }

    assert!(store.is_empty());
}

#[test]
fn test_threaded_watcher_feeds_store_through_channel() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let handle = watcher::spawn(
        Duration::from_millis(5),
        || {
            SequenceClipboard::new(&[
                Some("hello"),
                Some(MAGNET_A),
                None,
                Some(MAGNET_A),
                Some("world"),
            ])
        },
        tx,
    )
    .unwrap();

    // The read failure between the two copies makes the second one a change,
    // so the watcher reports it twice and the store keeps one.
    let mut received = Vec::new();
    while received.len() < 2 {
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            WatchEvent::MagnetDetected(link) => received.push(link),
        }
    }
    handle.stop();

    let mut store = LinkStore::new();
    for link in &received {
        store.insert(link.as_str());
    }
    assert_eq!(received, vec![MAGNET_A.to_string(), MAGNET_A.to_string()]);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_headless_collection_ends_after_stop() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let handle = watcher::spawn(
        Duration::from_millis(5),
        || SequenceClipboard::new(&[Some(MAGNET_A)]),
        tx,
    )
    .unwrap();

    let stopper = handle.clone();
    let stop_thread = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(100));
        stopper.stop();
    });

    let mut store = LinkStore::new();
    let mut out = Vec::new();
    collect_events(&rx, &mut store, &mut out).unwrap();
    stop_thread.join().unwrap();

    assert!(!handle.is_running());
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", MAGNET_A));
}
