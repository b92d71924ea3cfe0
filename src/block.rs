//! Managed block: find, remove and insert the marker-delimited host entries.
//!
//! ```text
//! # FocusFocusStart lines:2 Added:Sat, 17 Oct 2026 09:30:00 GMT
//! 127.0.0.1 news.example.com
//! 127.0.0.1 video.example.com
//! # FocusFocusStop
//! ```

use chrono::{DateTime, Utc};

use crate::error::{FocusError, Result};
use crate::hostfile::HostsFile;

/// Token identifying the first line of the managed block.
pub const START_MARKER: &str = "FocusFocusStart";

/// Token identifying the last line of the managed block.
pub const END_MARKER: &str = "FocusFocusStop";

/// Prefix of a hosts file comment line.
pub const COMMENT_MARKER: char = '#';

/// Address every blocked host is pointed at unless configured otherwise.
pub const DEFAULT_REDIRECT: &str = "127.0.0.1";

/// RFC 1123 date as used in HTTP headers.
const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Location and contents of an existing managed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    /// Index of the start marker line.
    pub start: usize,
    /// Index of the end marker line.
    pub end: usize,
    /// The start marker line itself (carries count and timestamp).
    pub header: String,
    /// Host entry lines between the markers.
    pub entries: Vec<String>,
}

impl BlockInfo {
    /// Hostnames from the entry lines (second field of `<redirect> <host>`).
    pub fn hosts(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|l| l.split_whitespace().nth(1))
            .collect()
    }
}

/// Whether `line` is a comment once surrounding whitespace is trimmed.
pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with(COMMENT_MARKER)
}

/// Whether `line` is a comment carrying the start token.
pub fn is_start_marker(line: &str) -> bool {
    is_comment(line) && line.contains(START_MARKER)
}

/// Whether `line` is a comment carrying the end token.
pub fn is_end_marker(line: &str) -> bool {
    is_comment(line) && line.contains(END_MARKER)
}

/// Index of the first start marker line.
pub fn find_start(lines: &[String]) -> Option<usize> {
    lines.iter().position(|l| is_start_marker(l))
}

/// Index of the first end marker line at or after `from`.
pub fn find_end(lines: &[String], from: usize) -> Option<usize> {
    lines
        .get(from..)?
        .iter()
        .position(|l| is_end_marker(l))
        .map(|i| from + i)
}

/// Start marker line for a block of `count` hosts created at `at`.
pub fn start_line(count: usize, at: DateTime<Utc>) -> String {
    format!(
        "{COMMENT_MARKER} {START_MARKER} lines:{count} Added:{}",
        at.format(TIMESTAMP_FORMAT)
    )
}

/// End marker line closing a block.
pub fn end_line() -> String {
    format!("{COMMENT_MARKER} {END_MARKER}")
}

/// Build the full block for `hosts`, markers included.
pub fn build_block(hosts: &[String], redirect: &str, at: DateTime<Utc>) -> Vec<String> {
    let mut block = Vec::with_capacity(hosts.len() + 2);
    block.push(start_line(hosts.len(), at));
    block.extend(hosts.iter().map(|h| format!("{redirect} {h}")));
    block.push(end_line());
    block
}

impl HostsFile {
    /// Locate the managed block without modifying anything.
    ///
    /// Fails with [`FocusError::MalformedBlock`] if a start marker has no end
    /// marker after it.
    pub fn find_block(&self) -> Result<Option<BlockInfo>> {
        let Some((start, end)) = self.block_range()? else {
            return Ok(None);
        };
        Ok(Some(BlockInfo {
            start,
            end,
            header: self.lines[start].clone(),
            entries: self
                .lines
                .get(start + 1..end)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        }))
    }

    /// Delete the managed block, markers included.
    ///
    /// Returns `Ok(false)` when there is no block. On
    /// [`FocusError::MalformedBlock`] the lines are left untouched.
    pub fn remove_block(&mut self) -> Result<bool> {
        let Some((start, end)) = self.block_range()? else {
            tracing::debug!("No managed block present");
            return Ok(false);
        };
        self.lines.drain(start..=end);
        tracing::info!(start, end, "Removed managed block");
        Ok(true)
    }

    /// Prepend a new managed block redirecting `hosts` to `redirect`.
    ///
    /// Returns `false` and leaves the lines alone when `hosts` is empty.
    pub fn add_block(&mut self, hosts: &[String], redirect: &str) -> bool {
        self.add_block_at(hosts, redirect, Utc::now())
    }

    /// Same as [`add_block`](Self::add_block) with an explicit creation time.
    pub fn add_block_at(&mut self, hosts: &[String], redirect: &str, at: DateTime<Utc>) -> bool {
        if hosts.is_empty() {
            return false;
        }
        let mut lines = build_block(hosts, redirect, at);
        lines.append(&mut self.lines);
        self.lines = lines;
        tracing::info!(hosts = hosts.len(), redirect = %redirect, "Added managed block");
        true
    }

    fn block_range(&self) -> Result<Option<(usize, usize)>> {
        let Some(start) = find_start(&self.lines) else {
            return Ok(None);
        };
        match find_end(&self.lines, start) {
            Some(end) => Ok(Some((start, end))),
            None => {
                tracing::warn!(line = start + 1, "Start marker without end marker");
                Err(FocusError::MalformedBlock { line: start + 1 })
            }
        }
    }
}
