//! Rsync Transfer
//!
//! Mirrors the local tree onto the remote deploy path. Remote files that
//! are absent locally are deleted unless an exclude pattern protects them.

use crate::config::DeployConfig;
use crate::domain::value_objects::Invocation;

/// Program name probed by the dependency check
pub const RSYNC: &str = "rsync";

/// Builds the single rsync call of a deployment
pub struct RsyncTransfer<'a> {
    config: &'a DeployConfig,
    dry_run: bool,
}

impl<'a> RsyncTransfer<'a> {
    pub fn new(config: &'a DeployConfig) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Ask rsync to report what would change without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// `rsync -avz --delete [--dry-run] --exclude <p>... <local> <alias>:<remote>`
    pub fn invocation(&self) -> Invocation {
        let mut inv = Invocation::new(RSYNC)
            .arg("-avz") // archive, verbose, compress
            .arg("--delete");

        if self.dry_run {
            inv = inv.arg("--dry-run");
        }

        for pattern in &self.config.sync.exclude {
            inv = inv.arg("--exclude").arg(pattern.as_str());
        }

        inv.arg(self.config.paths.local.to_string_lossy().into_owned())
            .arg(self.config.remote_destination())
    }
}
