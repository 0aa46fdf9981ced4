//! SSH Client
//!
//! Builds the connectivity probe and the remote command call. The host is
//! always referenced by its `~/.ssh/config` alias.

use crate::config::DeployConfig;
use crate::domain::value_objects::{Invocation, RemoteChain};

/// Program name probed by the dependency check
pub const SSH: &str = "ssh";

/// Remote command used by the connectivity probe
const PROBE_COMMAND: &str = "echo ok";

pub struct SshClient<'a> {
    alias: &'a str,
    connect_timeout_secs: u64,
}

impl<'a> SshClient<'a> {
    pub fn new(config: &'a DeployConfig) -> Self {
        Self {
            alias: &config.server.alias,
            connect_timeout_secs: config.server.connect_timeout_secs,
        }
    }

    /// Time-bounded, non-interactive `echo` on the remote host
    pub fn probe_invocation(&self) -> Invocation {
        Invocation::new(SSH)
            .arg("-o")
            .arg(format!("ConnectTimeout={}", self.connect_timeout_secs))
            // A password prompt would hang past the timeout
            .arg("-o")
            .arg("BatchMode=yes")
            .arg(self.alias)
            .arg(PROBE_COMMAND)
    }

    /// One ssh session running the whole chain
    pub fn exec_invocation(&self, chain: &RemoteChain) -> Invocation {
        Invocation::new(SSH).arg(self.alias).arg(chain.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_is_bounded_and_non_interactive() {
        let config = DeployConfig::default();
        let inv = SshClient::new(&config).probe_invocation();
        assert_eq!(
            inv.arguments(),
            ["-o", "ConnectTimeout=10", "-o", "BatchMode=yes", "aliyun", "echo ok"]
        );
    }

    #[test]
    fn probe_uses_configured_timeout() {
        let mut config = DeployConfig::default();
        config.server.connect_timeout_secs = 3;
        let inv = SshClient::new(&config).probe_invocation();
        assert!(inv.arguments().iter().any(|a| a == "ConnectTimeout=3"));
    }

    #[test]
    fn exec_passes_chain_as_single_argument() {
        let config = DeployConfig::default();
        let chain = RemoteChain::new(["step1", "step2"]);
        let inv = SshClient::new(&config).exec_invocation(&chain);
        assert_eq!(inv.arguments(), ["aliyun", "step1 && step2"]);
    }
}
