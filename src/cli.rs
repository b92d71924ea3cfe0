//! CLI definitions and command routing.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{FocusConfig, FocusPaths};
use crate::error::FocusError;
use crate::{focus, hostlist};

#[derive(Parser)]
#[command(name = "focusfocus")]
#[command(about = "Block time-wasting sites by redirecting them in the hosts file")]
pub struct Cli {
    /// Hosts file to edit instead of the system one
    #[arg(long, global = true, value_name = "PATH")]
    pub hosts_file: Option<PathBuf>,

    /// Address blocked hosts are redirected to
    #[arg(long, global = true, value_name = "ADDR")]
    pub redirect: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply restrictions: replace the focus block with hosts from a list file
    Focus {
        /// File with one hostname per line; blank lines and `#` comments are skipped
        hostlist: PathBuf,
    },
    /// Remove restrictions: delete the focus block, if any
    Relax,
    /// Show the hosts currently blocked
    Status,
}

/// Global options that consume the following argument as their value.
const VALUE_OPTIONS: &[&str] = &["--hosts-file", "--redirect"];

/// Lowercase the action so `FOCUS` and `Relax` are accepted.
pub fn normalize_action(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut args: Vec<String> = args.into_iter().collect();
    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if VALUE_OPTIONS.contains(&arg.as_str()) {
            i += 2;
        } else if arg.starts_with('-') {
            i += 1;
        } else {
            let action = arg.to_lowercase();
            args[i] = action;
            break;
        }
    }
    args
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_action(std::env::args()));
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Focus { hostlist } => cmd_focus(&config, &hostlist),
        Commands::Relax => cmd_relax(&config),
        Commands::Status => cmd_status(&config),
    }
}

/// Config file and env, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<FocusConfig> {
    let paths = FocusPaths::default_paths();
    let mut config = FocusConfig::load(&paths)?;
    if let Some(ref p) = cli.hosts_file {
        config.hosts_file = p.clone();
    }
    if let Some(ref r) = cli.redirect {
        config.redirect = r.clone();
    }
    tracing::debug!(?config, "Resolved config");
    Ok(config)
}

/// Editing the system hosts file needs root / administrator rights.
fn privilege_hint(e: FocusError) -> anyhow::Error {
    if e.is_permission_denied() {
        anyhow::Error::new(e)
            .context("hosts file is not writable; run with sudo or from an administrator prompt")
    } else {
        e.into()
    }
}

fn cmd_focus(config: &FocusConfig, hostlist: &std::path::Path) -> Result<()> {
    let hosts = hostlist::load(hostlist)
        .with_context(|| format!("unable to load focus list {}", hostlist.display()))?;
    let outcome = focus::focus(config, &hosts)
        .map_err(privilege_hint)
        .context("unable to apply focus list")?;
    let path = config.hosts_file.display();
    if outcome.removed {
        println!("Focus lines removed from hosts file ({path})");
    }
    if outcome.added {
        println!("Focus list of {} hosts added to hosts file ({path})", hosts.len());
    } else {
        println!("Focus list is empty; nothing added");
    }
    Ok(())
}

fn cmd_relax(config: &FocusConfig) -> Result<()> {
    let path = config.hosts_file.display();
    let removed = focus::relax(config)
        .map_err(privilege_hint)
        .context("unable to remove focus host entries")?;
    if removed {
        println!("Focus lines removed from hosts file ({path})");
    } else {
        println!("No focus lines in hosts file ({path})");
    }
    Ok(())
}

fn cmd_status(config: &FocusConfig) -> Result<()> {
    match focus::status(config)? {
        Some(block) => {
            println!("{}", block.header.trim());
            for host in block.hosts() {
                println!("{host}");
            }
        }
        None => println!("Not focused"),
    }
    Ok(())
}
