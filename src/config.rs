//! Configuration loading and path resolution.
//!
//! Supports FOCUSFOCUS_HOME and FOCUSFOCUS_HOSTS_FILE env var overrides for
//! testing.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::block::DEFAULT_REDIRECT;
use crate::error::{FocusError, Result};
use crate::platform;

/// Env var naming the directory holding `config.toml`.
pub const HOME_ENV: &str = "FOCUSFOCUS_HOME";

/// Env var overriding the hosts file path.
pub const HOSTS_FILE_ENV: &str = "FOCUSFOCUS_HOSTS_FILE";

/// Line terminator written after every hosts file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        platform::default_line_ending()
    }
}

/// Paths for focusfocus configuration.
#[derive(Debug, Clone)]
pub struct FocusPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl FocusPaths {
    /// Build paths from base directory (e.g. ProjectDirs config dir or FOCUSFOCUS_HOME).
    pub fn from_base(base: PathBuf) -> Self {
        let config_file = base.join("config.toml");
        Self {
            config_dir: base,
            config_file,
        }
    }

    /// Paths for testing: use a temp dir as base.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        Self::from_base(base.as_ref().to_path_buf())
    }

    /// Get default paths (respects FOCUSFOCUS_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var(HOME_ENV) {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("com", "focusfocus", "focusfocus") {
            dirs.config_dir().to_path_buf()
        } else {
            PathBuf::from(".focusfocus")
        };
        Self::from_base(base)
    }
}

/// On-disk `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub hosts_file: Option<PathBuf>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub line_ending: Option<LineEnding>,
}

impl ConfigFile {
    /// Load config.toml, or defaults when it does not exist.
    pub fn load(paths: &FocusPaths) -> Result<ConfigFile> {
        if !paths.config_file.is_file() {
            return Ok(ConfigFile::default());
        }
        let s = fs::read_to_string(&paths.config_file)
            .map_err(|e| FocusError::io(&paths.config_file, e))?;
        toml::from_str(&s)
            .map_err(|e| FocusError::Config(format!("{}: {e}", paths.config_file.display())))
    }
}

/// Settings resolved once at startup and passed to every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusConfig {
    pub hosts_file: PathBuf,
    pub redirect: String,
    pub line_ending: LineEnding,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            hosts_file: platform::default_hosts_path(),
            redirect: DEFAULT_REDIRECT.to_string(),
            line_ending: LineEnding::default(),
        }
    }
}

impl FocusConfig {
    /// Config for a specific hosts file with platform defaults otherwise.
    pub fn for_hosts_file(path: impl Into<PathBuf>) -> Self {
        Self {
            hosts_file: path.into(),
            ..Self::default()
        }
    }

    /// Platform defaults overlaid with config.toml, then FOCUSFOCUS_HOSTS_FILE.
    pub fn load(paths: &FocusPaths) -> Result<FocusConfig> {
        let mut config = FocusConfig::default().merge(ConfigFile::load(paths)?);
        if let Some(path) = std::env::var_os(HOSTS_FILE_ENV) {
            config.hosts_file = PathBuf::from(path);
        }
        Ok(config)
    }

    /// Overlay every key set in `file`.
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(p) = file.hosts_file {
            self.hosts_file = p;
        }
        if let Some(r) = file.redirect {
            self.redirect = r;
        }
        if let Some(le) = file.line_ending {
            self.line_ending = le;
        }
        self
    }
}
