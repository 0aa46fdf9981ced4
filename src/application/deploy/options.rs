//! Deploy Options

use crate::domain::ports::OutputMode;

/// How external tool output is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployOutputOptions {
    /// rsync and remote command output goes straight to the terminal
    #[default]
    Stream,
    /// Tool output is captured so it cannot interleave with machine-readable events
    Capture,
}

impl DeployOutputOptions {
    pub(crate) fn output_mode(&self) -> OutputMode {
        match self {
            DeployOutputOptions::Stream => OutputMode::Inherit,
            DeployOutputOptions::Capture => OutputMode::Capture,
        }
    }
}

/// Options for a single deployment run
#[derive(Debug, Clone, Copy, Default)]
pub struct DeployOptions {
    /// Run rsync with `--dry-run` and skip remote commands
    pub dry_run: bool,
    pub output: DeployOutputOptions,
}

impl DeployOptions {
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn output(mut self, output: DeployOutputOptions) -> Self {
        self.output = output;
        self
    }
}
