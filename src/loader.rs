//! Record Loader
//!
//! Reads `name - number` lines and feeds them into a table.
//!
//! ## Line handling
//! - Lines are read as bytes and decoded lossily, so stray invalid UTF-8
//!   never aborts a load
//! - Anything past `max_line_len` bytes is cut off before parsing
//! - Whitespace-only lines are ignored
//! - Lines without a `-` are logged and skipped; loading continues

use std::borrow::Cow;
use std::io::BufRead;

use crate::config::Config;
use crate::error::Result;
use crate::hash::KeyHasher;
use crate::record::{trim_space, Record};
use crate::table::HashTable;

/// Outcome of a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records inserted into the table
    pub loaded: usize,

    /// Lines rejected for lacking a separator
    pub skipped: usize,

    /// Empty or whitespace-only lines
    pub blank: usize,
}

/// Parses phonebook lines into a [`HashTable`]
#[derive(Debug, Clone)]
pub struct Loader {
    max_line_len: usize,
}

impl Loader {
    pub fn new(config: &Config) -> Self {
        Self::with_max_line_len(config.max_line_len)
    }

    pub fn with_max_line_len(max_line_len: usize) -> Self {
        Self { max_line_len }
    }

    /// Insert every valid record from `reader` into `table`, keyed by name
    pub fn load<R, H>(&self, mut reader: R, table: &mut HashTable<Record, H>) -> Result<LoadSummary>
    where
        R: BufRead,
        H: KeyHasher,
    {
        let mut summary = LoadSummary::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = self.decode(&buf);
            if trim_space(&line).is_empty() {
                summary.blank += 1;
                continue;
            }

            match line.parse::<Record>() {
                Ok(record) => {
                    tracing::trace!("Line {}: parsed {}", line_no, record);
                    table.insert(record.name.clone(), record);
                    summary.loaded += 1;
                }
                Err(e) => {
                    tracing::warn!("Line {}: {}", line_no, e);
                    summary.skipped += 1;
                }
            }
        }

        tracing::debug!(
            "Loaded {} records ({} skipped, {} blank)",
            summary.loaded,
            summary.skipped,
            summary.blank
        );
        Ok(summary)
    }

    /// Strip the line terminator and cut the line to `max_line_len` bytes
    fn decode<'a>(&self, raw: &'a [u8]) -> Cow<'a, str> {
        let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let kept = &raw[..raw.len().min(self.max_line_len)];
        String::from_utf8_lossy(kept)
    }
}
