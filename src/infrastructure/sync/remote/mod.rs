//! Remote tooling: rsync for files, ssh for commands

mod rsync;
mod ssh;

pub use rsync::{RsyncTransfer, RSYNC};
pub use ssh::{SshClient, SSH};

/// Tools the dependency check requires, probed in this order
pub const REQUIRED_TOOLS: [&str; 2] = [RSYNC, SSH];
