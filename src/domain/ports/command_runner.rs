//! Command Runner Port
//!
//! Abstracts tool lookup and process execution so the deploy use case can
//! be driven by a scripted runner in tests.

use std::path::PathBuf;

use crate::domain::value_objects::Invocation;
use crate::error::DeployResult;

/// What to do with a child's stdout/stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Stream to the user's terminal
    Inherit,
    /// Collect for later reporting
    Capture,
}

/// Exit status and any captured output of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Trimmed stderr, if there is any worth showing
    pub fn error_text(&self) -> Option<String> {
        let trimmed = self.stderr.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Trait for looking up and running external tools
pub trait CommandRunner {
    /// Resolve a tool name on the search path
    fn resolve(&self, tool: &str) -> Option<PathBuf>;

    /// Run to completion, blocking the caller.
    ///
    /// A non-zero exit is reported through [`CommandOutcome`], not as an error;
    /// `Err` means the program could not be started.
    fn run(&self, invocation: &Invocation, output: OutputMode) -> DeployResult<CommandOutcome>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn resolve(&self, tool: &str) -> Option<PathBuf> {
        (**self).resolve(tool)
    }

    fn run(&self, invocation: &Invocation, output: OutputMode) -> DeployResult<CommandOutcome> {
        (**self).run(invocation, output)
    }
}
