//! Focus, relax and status: load the hosts file, edit the managed block, write it back.

use crate::block::BlockInfo;
use crate::config::FocusConfig;
use crate::error::Result;
use crate::hostfile::{self, HostsFile};

/// What [`focus`] changed in the hosts file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusOutcome {
    /// A previous managed block was removed.
    pub removed: bool,
    /// A new managed block was written.
    pub added: bool,
}

impl FocusOutcome {
    pub fn changed(&self) -> bool {
        self.removed || self.added
    }
}

/// Replace any existing managed block with one for `hosts`.
///
/// Nothing is written if the existing block is malformed. With an empty
/// host list this behaves like [`relax`].
pub fn focus(config: &FocusConfig, hosts: &[String]) -> Result<FocusOutcome> {
    let path = &config.hosts_file;
    hostfile::check_writable(path)?;
    let mut file = HostsFile::load(path)?;

    let removed = file.remove_block()?;
    let added = file.add_block(hosts, &config.redirect);
    let outcome = FocusOutcome { removed, added };

    if outcome.changed() {
        file.save(path, config.line_ending)?;
    }
    tracing::debug!(path = %path.display(), removed, added, "focus done");
    Ok(outcome)
}

/// Remove the managed block. Returns `false` if there was none.
pub fn relax(config: &FocusConfig) -> Result<bool> {
    let path = &config.hosts_file;
    hostfile::check_writable(path)?;
    let mut file = HostsFile::load(path)?;

    let removed = file.remove_block()?;
    if removed {
        file.save(path, config.line_ending)?;
    }
    Ok(removed)
}

/// Current managed block, if any. Read-only.
pub fn status(config: &FocusConfig) -> Result<Option<BlockInfo>> {
    HostsFile::load(&config.hosts_file)?.find_block()
}
