//! Headless mode
//!
//! Runs the clipboard watcher without a window. New magnet links are printed
//! to stdout, one per line, until Ctrl-C.

use std::io::Write;
use std::thread;

use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use tracing::{info, warn};

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::store::LinkStore;
use crate::watcher::{self, WatchEvent, WatcherHandle};

/// Watch the system clipboard until interrupted.
///
/// Returns the number of distinct links collected.
pub fn run(config: &Config) -> Result<usize> {
    let (tx, rx) = crossbeam_channel::unbounded();
    let handle = watcher::spawn(config.poll_interval(), SystemClipboard::new, tx)
        .context("Failed to start clipboard watcher")?;

    spawn_interrupt_listener(handle)?;
    info!("Running headless, press Ctrl-C to stop");

    let mut store = LinkStore::new();
    let stdout = std::io::stdout();
    collect_events(&rx, &mut store, &mut stdout.lock()).context("Failed to write to stdout")?;

    info!("Collected {} magnet link(s)", store.len());
    Ok(store.len())
}

/// Drain watcher events into `store` until the watcher goes away,
/// writing each newly collected link to `out`.
pub fn collect_events<W: Write>(
    rx: &Receiver<WatchEvent>,
    store: &mut LinkStore,
    out: &mut W,
) -> std::io::Result<()> {
    for event in rx.iter() {
        match event {
            WatchEvent::MagnetDetected(link) => {
                if store.insert(link.as_str()) {
                    info!("New magnet link detected: {}", link);
                    writeln!(out, "{}", link)?;
                    out.flush()?;
                }
            }
        }
    }
    Ok(())
}

/// Stop the watcher on Ctrl-C.
fn spawn_interrupt_listener(handle: WatcherHandle) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create signal runtime")?;

    thread::Builder::new()
        .name("interrupt-listener".to_string())
        .spawn(move || {
            let interrupted = runtime.block_on(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Unable to listen for Ctrl-C: {}", e);
                        false
                    }
                }
            });

            if interrupted {
                info!("Interrupt received, stopping watcher");
                handle.stop();
            }
        })
        .context("Failed to spawn interrupt listener")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "magnet:?xt=urn:btih:AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    const B: &str = "magnet:?xt=urn:btih:0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn test_collect_events_prints_new_links_once() {
        let (tx, rx) = crossbeam_channel::unbounded();
        for link in [A, B, A] {
            tx.send(WatchEvent::MagnetDetected(link.to_string())).unwrap();
        }
        drop(tx);

        let mut store = LinkStore::new();
        let mut out = Vec::new();
        collect_events(&rx, &mut store, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n{}\n", A, B));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_collect_events_returns_when_channel_closes() {
        let (tx, rx) = crossbeam_channel::unbounded::<WatchEvent>();
        drop(tx);

        let mut store = LinkStore::new();
        let mut out = Vec::new();
        collect_events(&rx, &mut store, &mut out).unwrap();
        assert!(out.is_empty());
        assert!(store.is_empty());
    }
}
