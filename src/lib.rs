//! focusfocus - block distracting sites through a managed hosts file block.

pub mod block;
pub mod cli;
pub mod config;
pub mod error;
pub mod focus;
pub mod hostfile;
pub mod hostlist;
pub mod logging;
pub mod platform;

pub use error::{FocusError, Result};
