//! Unix (macOS, Linux) platform defaults.

use std::path::PathBuf;

pub const HOSTS_PATH: &str = "/etc/hosts";

pub fn hosts_path() -> PathBuf {
    PathBuf::from(HOSTS_PATH)
}
