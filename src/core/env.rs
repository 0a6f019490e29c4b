//! Env file codec.
//!
//! Parses newline-delimited `KEY=VALUE` bytes and renders entries as shell
//! `export` statements. Values are raw bytes borrowed from the input and
//! pass through unchanged, so a non-UTF-8 secret exports exactly as stored.

use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

/// Replacement for every `'` inside a single-quoted shell word.
const QUOTE_ESCAPE: &[u8] = br#"'"'"'"#;

/// A single `KEY=VALUE` pair, in source order.
///
/// Keys are not deduplicated; a repeated key is emitted twice and the shell
/// keeps the last one.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EnvEntry<'a> {
    pub key: &'a str,
    pub value: &'a [u8],
}

impl<'a> EnvEntry<'a> {
    pub fn new(key: &'a str, value: &'a [u8]) -> Self {
        Self { key, value }
    }
}

impl fmt::Debug for EnvEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvEntry")
            .field("key", &self.key)
            .field("value_len", &self.value.len())
            .finish()
    }
}

/// Classification of one trimmed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Invalid,
    Comment,
    Entry(&'a str, &'a [u8]),
}

impl<'a> Line<'a> {
    /// Classify a raw line.
    ///
    /// Filters apply in order: blank, key pattern, comment. The comment
    /// filter stays even though a `#` can never start a valid key.
    pub fn classify(raw: &'a [u8]) -> Self {
        let line = trim(raw);

        if line.is_empty() {
            return Self::Blank;
        }
        let Some(split) = line.iter().position(|&b| b == b'=') else {
            return Self::Invalid;
        };
        let (key, value) = (&line[..split], &line[split + 1..]);
        if !is_key(key) {
            return Self::Invalid;
        }
        if line.starts_with(b"#") {
            return Self::Comment;
        }

        match std::str::from_utf8(key) {
            Ok(key) => Self::Entry(key, value),
            Err(_) => Self::Invalid,
        }
    }
}

/// `^[A-Za-z][0-9A-Za-z_]*$`
fn is_key(key: &[u8]) -> bool {
    match key.split_first() {
        Some((first, rest)) if first.is_ascii_alphabetic() => rest
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'_'),
        _ => false,
    }
}

/// Strip leading and trailing ASCII whitespace.
fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

fn is_newline(byte: &u8) -> bool {
    *byte == b'\n'
}

/// Lazy iterator over the entries of an env file.
pub struct EnvLines<'a> {
    lines: std::iter::Enumerate<std::slice::Split<'a, u8, fn(&u8) -> bool>>,
}

impl<'a> Iterator for EnvLines<'a> {
    type Item = EnvEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (number, raw) in self.lines.by_ref() {
            match Line::classify(raw) {
                Line::Blank => debug!(line = number, "empty line"),
                Line::Invalid => debug!(line = number, "invalid line"),
                Line::Comment => debug!(line = number, "comment line"),
                Line::Entry(key, value) => return Some(EnvEntry::new(key, value)),
            }
        }
        None
    }
}

/// Parse env file contents.
///
/// Blank, comment and malformed lines are skipped; the value is everything
/// after the first `=`, byte for byte.
pub fn parse<T: AsRef<[u8]> + ?Sized>(contents: &T) -> EnvLines<'_> {
    EnvLines {
        lines: contents
            .as_ref()
            .split(is_newline as fn(&u8) -> bool)
            .enumerate(),
    }
}

/// Replace each `'` with `'"'"'` so the value can sit inside single quotes.
pub fn escape_single_quote(value: &[u8]) -> Zeroizing<Vec<u8>> {
    let quotes = value.iter().filter(|&&b| b == b'\'').count();
    let mut out = Zeroizing::new(Vec::with_capacity(
        value.len() + quotes * (QUOTE_ESCAPE.len() - 1),
    ));
    for &byte in value {
        if byte == b'\'' {
            out.extend_from_slice(QUOTE_ESCAPE);
        } else {
            out.push(byte);
        }
    }
    out
}

/// Render an entry as `export KEY='VALUE'`.
///
/// The buffer is sized up front so the value is never copied into a
/// reallocated, unzeroed block.
pub fn render(entry: &EnvEntry<'_>) -> Zeroizing<Vec<u8>> {
    let escaped = escape_single_quote(entry.value);
    let mut out = Zeroizing::new(Vec::with_capacity(
        "export ".len() + entry.key.len() + "='".len() + escaped.len() + 1,
    ));
    out.extend_from_slice(b"export ");
    out.extend_from_slice(entry.key.as_bytes());
    out.extend_from_slice(b"='");
    out.extend_from_slice(&escaped);
    out.push(b'\'');
    out
}
