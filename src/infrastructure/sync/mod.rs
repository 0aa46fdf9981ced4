//! Sync infrastructure

pub mod remote;

pub use remote::{RsyncTransfer, SshClient, REQUIRED_TOOLS};
