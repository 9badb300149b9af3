//! Magnet link classification
//!
//! A clipboard value counts as a magnet link when it starts with the
//! `magnet:?xt=urn:btih:` prefix followed by a 40-character hexadecimal
//! BitTorrent info-hash. The hash must end after exactly 40 digits, either at
//! the end of the text or at a non-hex character such as the `&` that starts
//! `&dn=` / `&tr=` parameters. Shorter or longer hashes are rejected.

use std::sync::OnceLock;

use regex::Regex;

/// URI prefix every accepted link starts with
pub const MAGNET_PREFIX: &str = "magnet:?xt=urn:btih:";

/// Length of a hex-encoded SHA-1 info-hash
pub const INFO_HASH_LEN: usize = 40;

static MAGNET_REGEX: OnceLock<Regex> = OnceLock::new();

fn magnet_regex() -> &'static Regex {
    MAGNET_REGEX.get_or_init(|| {
        Regex::new(r"\Amagnet:\?xt=urn:btih:[0-9a-fA-F]{40}(?:[^0-9a-fA-F]|\z)")
            .expect("magnet pattern is a valid regex literal")
    })
}

/// Returns true if `text` is a magnet link with a 40-digit hex info-hash.
pub fn is_magnet_link(text: &str) -> bool {
    magnet_regex().is_match(text)
}
