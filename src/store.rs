//! Deduplicating link store
//!
//! Holds the set of collected links together with the display log that
//! mirrors it. Both are private so they can only change together.

use std::collections::HashSet;

/// Collected magnet links in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct LinkStore {
    /// Membership index
    seen: HashSet<String>,
    /// Display lines, in insertion order
    lines: Vec<String>,
}

impl LinkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a link. Returns false if it was already present.
    pub fn insert(&mut self, link: impl Into<String>) -> bool {
        let link = link.into();
        if self.seen.contains(&link) {
            return false;
        }
        self.seen.insert(link.clone());
        self.lines.push(link);
        true
    }

    /// Whether `link` has been collected
    pub fn contains(&self, link: &str) -> bool {
        self.seen.contains(link)
    }

    /// Drop every collected link
    pub fn clear(&mut self) {
        self.seen.clear();
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Links in the order they were first inserted
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Display log text: every link followed by a newline.
    pub fn display_text(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Text placed on the clipboard by "Copy All": links joined by `\n`.
    pub fn copy_all_text(&self) -> String {
        self.lines.join("\n")
    }
}
