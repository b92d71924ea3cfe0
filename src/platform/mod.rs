//! Platform defaults for the hosts file location and line ending.

use std::path::PathBuf;

use crate::config::LineEnding;

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

/// Location of the system hosts file.
pub fn default_hosts_path() -> PathBuf {
    #[cfg(unix)]
    return unix::hosts_path();

    #[cfg(windows)]
    return windows::hosts_path();
}

/// Line ending native to the platform's hosts file.
pub fn default_line_ending() -> LineEnding {
    #[cfg(unix)]
    return LineEnding::Lf;

    #[cfg(windows)]
    return LineEnding::CrLf;
}
