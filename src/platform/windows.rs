//! Windows platform defaults.

use std::path::PathBuf;

const FALLBACK_SYSTEM_ROOT: &str = r"C:\Windows";

/// `%SystemRoot%\System32\drivers\etc\hosts`.
pub fn hosts_path() -> PathBuf {
    let root = std::env::var_os("SystemRoot")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(FALLBACK_SYSTEM_ROOT));
    root.join("System32").join("drivers").join("etc").join("hosts")
}
