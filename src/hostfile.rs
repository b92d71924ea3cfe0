//! Hosts file read/write.
//!
//! The whole file is held in memory as one `String` per line. Block
//! operations live in [`crate::block`].

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::LineEnding;
use crate::error::{FocusError, Result};

/// In-memory copy of a hosts file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsFile {
    pub(crate) lines: Vec<String>,
}

impl HostsFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read every line of `path`. Line content is kept as-is apart from the
    /// `\n` / `\r\n` terminator.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| FocusError::io(path, e))?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| FocusError::io(path, e))?;
        tracing::debug!(path = %path.display(), lines = lines.len(), "Loaded hosts file");
        Ok(Self { lines })
    }

    /// Overwrite `path` with the current lines, each followed by `line_ending`.
    pub fn save(&self, path: &Path, line_ending: LineEnding) -> Result<()> {
        check_writable(path)?;
        let file = fs::File::create(path).map_err(|e| FocusError::io(path, e))?;
        let mut w = BufWriter::new(file);
        let eol = line_ending.as_str();
        for line in &self.lines {
            write!(w, "{line}{eol}").map_err(|e| FocusError::io(path, e))?;
        }
        w.flush().map_err(|e| FocusError::io(path, e))?;
        tracing::debug!(path = %path.display(), lines = self.lines.len(), "Wrote hosts file");
        Ok(())
    }
}

/// Open `path` for writing and close it again, without truncating.
///
/// Fails early with a clear error when the hosts file is read-only or the
/// process lacks privileges.
pub fn check_writable(path: &Path) -> Result<()> {
    fs::OpenOptions::new()
        .write(true)
        .open(path)
        .map(drop)
        .map_err(|e| FocusError::io(path, e))
}
