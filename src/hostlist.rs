//! Host list file: one hostname per line.

use std::path::Path;

use crate::error::{FocusError, Result};

/// Load hostnames from `path`.
///
/// Surrounding whitespace is trimmed; blank lines and `#` comments are
/// skipped. Names are not validated.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| FocusError::io(path, e))?;
    Ok(parse(&content))
}

pub fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect()
}
