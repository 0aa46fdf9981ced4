//! Deploy Report
//!
//! Summary of a successful deployment.

use std::time::Duration;

/// Result of a successful deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub host: String,
    pub remote_path: String,
    /// Number of exclude patterns passed to rsync
    pub excluded: usize,
    /// Number of remote steps executed (0 on a dry run)
    pub steps_run: usize,
    pub dry_run: bool,
    pub elapsed: Duration,
}
