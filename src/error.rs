//! Error types for shipsync
//!
//! Library code returns `DeployError`; the binary wraps it in `anyhow`
//! and downcasts at the top level to render remediation hints.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Stage;

/// Result type alias for shipsync operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Every way a deployment can stop early
#[derive(Error, Debug)]
pub enum DeployError {
    /// One or more required local tools are not on PATH
    #[error("missing dependencies: {}", .missing.join(", "))]
    MissingTools { missing: Vec<String> },

    /// Connectivity probe failed or timed out
    #[error("cannot reach '{alias}' over ssh")]
    Unreachable { alias: String, detail: Option<String> },

    /// rsync exited non-zero
    #[error("file sync failed (exit code {})", display_code(.code))]
    SyncFailed { code: Option<i32>, detail: Option<String> },

    /// The remote command chain exited non-zero
    #[error("remote commands failed (exit code {})", display_code(.code))]
    RemoteCommandFailed {
        code: Option<i32>,
        steps: Vec<String>,
        detail: Option<String>,
    },

    /// Ctrl+C was pressed while deploying.
    ///
    /// `stage` is the stage that was running, or the last one to finish when
    /// the interrupt landed between stages.
    #[error("deployment interrupted by user")]
    Interrupted { stage: Stage },

    /// An external program could not be started at all
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected shape
    #[error("invalid config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Config parsed but failed validation
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl DeployError {
    /// Whether remote state may have been partially changed when this error was raised
    pub fn remote_state_indeterminate(&self) -> bool {
        matches!(
            self,
            DeployError::SyncFailed { .. }
                | DeployError::RemoteCommandFailed { .. }
                | DeployError::Interrupted {
                    stage: Stage::Sync | Stage::Remote
                }
        )
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none, killed by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tools_names_every_tool() {
        let err = DeployError::MissingTools {
            missing: vec!["rsync".to_string(), "ssh".to_string()],
        };
        assert_eq!(err.to_string(), "missing dependencies: rsync, ssh");
    }

    #[test]
    fn sync_failed_shows_exit_code() {
        let err = DeployError::SyncFailed {
            code: Some(23),
            detail: None,
        };
        assert_eq!(err.to_string(), "file sync failed (exit code 23)");
    }

    #[test]
    fn remote_failure_without_code_mentions_signal() {
        let err = DeployError::RemoteCommandFailed {
            code: None,
            steps: vec![],
            detail: None,
        };
        assert!(err.to_string().contains("killed by signal"));
    }

    #[test]
    fn only_mutating_stages_leave_remote_indeterminate() {
        assert!(DeployError::SyncFailed {
            code: Some(1),
            detail: None
        }
        .remote_state_indeterminate());
        assert!(!DeployError::Interrupted {
            stage: Stage::Connectivity
        }
        .remote_state_indeterminate());
        assert!(DeployError::Interrupted { stage: Stage::Sync }.remote_state_indeterminate());
        assert!(DeployError::Interrupted {
            stage: Stage::Remote
        }
        .remote_state_indeterminate());
        assert!(!DeployError::Unreachable {
            alias: "prod".to_string(),
            detail: None
        }
        .remote_state_indeterminate());
    }
}
