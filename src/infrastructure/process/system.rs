//! `CommandRunner` backed by the operating system

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutcome, CommandRunner, OutputMode};
use crate::domain::value_objects::Invocation;
use crate::error::{DeployError, DeployResult};

/// Runs programs directly (no local shell), blocking until they exit
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn resolve(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }

    fn run(&self, invocation: &Invocation, output: OutputMode) -> DeployResult<CommandOutcome> {
        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.arguments())
            .stdin(Stdio::inherit()); // Allow host key confirmation

        let spawn_error = |source: std::io::Error| DeployError::Spawn {
            program: invocation.program().to_string(),
            source,
        };

        match output {
            OutputMode::Capture => {
                let out = cmd
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .map_err(spawn_error)?;
                Ok(CommandOutcome {
                    code: out.status.code(),
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
                })
            }
            OutputMode::Inherit => {
                let status = cmd.status().map_err(spawn_error)?;
                Ok(CommandOutcome {
                    code: status.code(),
                    ..CommandOutcome::default()
                })
            }
        }
    }
}
