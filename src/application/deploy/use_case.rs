//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Check that rsync and ssh are installed
//! 2. Probe the remote host over ssh
//! 3. Mirror the local tree with rsync
//! 4. Run the remote command chain in one ssh session
//! 5. Report completion
//!
//! Every stage is a gate: the first failure ends the run. Nothing is
//! retried and nothing already applied on the remote host is rolled back.

use std::sync::Arc;
use std::time::Instant;

use crate::config::DeployConfig;
use crate::domain::ports::{
    CommandOutcome, CommandRunner, DeployEvent, DeployEventSink, NoopEventSink, OutputMode,
};
use crate::domain::value_objects::{Invocation, RemoteChain, Stage};
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::{InterruptFlag, RsyncTransfer, SshClient, REQUIRED_TOOLS};

use super::options::DeployOptions;
use super::result::DeployReport;

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its command runner so tests can script every
/// external call.
pub struct DeployUseCase<'a, R>
where
    R: CommandRunner,
{
    config: &'a DeployConfig,
    runner: R,
    events: Arc<dyn DeployEventSink>,
    interrupt: InterruptFlag,
}

impl<'a, R> DeployUseCase<'a, R>
where
    R: CommandRunner,
{
    pub fn new(
        config: &'a DeployConfig,
        runner: R,
        events: Arc<dyn DeployEventSink>,
        interrupt: InterruptFlag,
    ) -> Self {
        Self {
            config,
            runner,
            events,
            interrupt,
        }
    }

    /// Use case that reports nothing and cannot be interrupted
    pub fn silent(config: &'a DeployConfig, runner: R) -> Self {
        Self::new(config, runner, Arc::new(NoopEventSink), InterruptFlag::new())
    }

    /// Run every stage in order
    pub fn execute(&self, options: &DeployOptions) -> DeployResult<DeployReport> {
        let started = Instant::now();

        self.emit(DeployEvent::Started {
            alias: self.config.server.alias.clone(),
            host: self.config.server.host.clone(),
            destination: self.config.remote_destination(),
            dry_run: options.dry_run,
        });

        self.check_dependencies()?;
        self.ensure_not_interrupted(Stage::Dependencies)?;

        self.check_connectivity()?;
        self.ensure_not_interrupted(Stage::Connectivity)?;

        self.emit(DeployEvent::AboutToDeploy {
            host: self.config.server.host.clone(),
        });

        self.sync_files(options)?;
        self.ensure_not_interrupted(Stage::Sync)?;

        let steps_run = self.run_remote_commands(options)?;

        let report = DeployReport {
            host: self.config.server.host.clone(),
            remote_path: self.config.paths.remote.clone(),
            excluded: self.config.sync.exclude.len(),
            steps_run,
            dry_run: options.dry_run,
            elapsed: started.elapsed(),
        };

        self.emit(DeployEvent::Completed {
            host: report.host.clone(),
            remote_path: report.remote_path.clone(),
            excluded: report.excluded,
            steps: report.steps_run,
            elapsed: report.elapsed,
            dry_run: report.dry_run,
        });

        Ok(report)
    }

    /// Stage 1: every required tool must resolve on PATH.
    ///
    /// All tools are probed before failing so the user sees the complete list.
    pub fn check_dependencies(&self) -> DeployResult<()> {
        let stage = Stage::Dependencies;
        self.emit(DeployEvent::StageStarted { stage });

        let mut missing = Vec::new();
        for tool in REQUIRED_TOOLS {
            match self.runner.resolve(tool) {
                Some(path) => self.emit(DeployEvent::ToolFound {
                    name: tool.to_string(),
                    path,
                }),
                None => {
                    self.emit(DeployEvent::ToolMissing {
                        name: tool.to_string(),
                    });
                    missing.push(tool.to_string());
                }
            }
        }

        if !missing.is_empty() {
            return Err(self.fail(stage, DeployError::MissingTools { missing }));
        }

        self.emit(DeployEvent::StageCompleted {
            stage,
            message: "All dependencies installed".to_string(),
        });
        Ok(())
    }

    /// Stage 2: a trivial remote command must succeed within the connect timeout
    pub fn check_connectivity(&self) -> DeployResult<()> {
        let stage = Stage::Connectivity;
        self.emit(DeployEvent::StageStarted { stage });

        let probe = SshClient::new(self.config).probe_invocation();
        let outcome = self.run(stage, &probe, OutputMode::Capture)?;

        if !outcome.success() {
            return Err(self.fail(
                stage,
                DeployError::Unreachable {
                    alias: self.config.server.alias.clone(),
                    detail: outcome.error_text(),
                },
            ));
        }

        self.emit(DeployEvent::StageCompleted {
            stage,
            message: "SSH connection OK".to_string(),
        });
        Ok(())
    }

    /// Stage 3: mirror the local tree, deleting remote files absent locally
    pub fn sync_files(&self, options: &DeployOptions) -> DeployResult<()> {
        let stage = Stage::Sync;
        self.emit(DeployEvent::StageStarted { stage });

        let rsync = RsyncTransfer::new(self.config)
            .dry_run(options.dry_run)
            .invocation();
        let outcome = self.run(stage, &rsync, options.output.output_mode())?;

        if !outcome.success() {
            return Err(self.fail(
                stage,
                DeployError::SyncFailed {
                    code: outcome.code,
                    detail: outcome.error_text(),
                },
            ));
        }

        let message = if options.dry_run {
            "File sync preview complete (dry run)"
        } else {
            "File sync complete"
        };
        self.emit(DeployEvent::StageCompleted {
            stage,
            message: message.to_string(),
        });
        Ok(())
    }

    /// Stage 4: run the remote chain in one ssh session.
    ///
    /// Returns the number of steps sent to the remote host.
    pub fn run_remote_commands(&self, options: &DeployOptions) -> DeployResult<usize> {
        let stage = Stage::Remote;
        self.emit(DeployEvent::StageStarted { stage });

        let chain = RemoteChain::new(self.config.remote_commands());
        let exec = SshClient::new(self.config).exec_invocation(&chain);

        if options.dry_run {
            self.emit(DeployEvent::CommandIssued {
                stage,
                command_line: exec.command_line(),
            });
            self.emit(DeployEvent::StageSkipped {
                stage,
                reason: "dry run".to_string(),
            });
            return Ok(0);
        }

        let outcome = self.run(stage, &exec, options.output.output_mode())?;

        if !outcome.success() {
            return Err(self.fail(
                stage,
                DeployError::RemoteCommandFailed {
                    code: outcome.code,
                    steps: chain.steps().to_vec(),
                    detail: outcome.error_text(),
                },
            ));
        }

        self.emit(DeployEvent::StageCompleted {
            stage,
            message: "Remote commands complete".to_string(),
        });
        Ok(chain.len())
    }

    /// Run one external command, turning a Ctrl+C during it into `Interrupted`
    fn run(
        &self,
        stage: Stage,
        invocation: &Invocation,
        output: OutputMode,
    ) -> DeployResult<CommandOutcome> {
        self.emit(DeployEvent::CommandIssued {
            stage,
            command_line: invocation.command_line(),
        });

        let outcome = self
            .runner
            .run(invocation, output)
            .map_err(|err| self.fail(stage, err))?;

        // The child died from the same SIGINT; its exit status is meaningless
        if self.interrupt.is_raised() {
            return Err(DeployError::Interrupted { stage });
        }

        Ok(outcome)
    }

    /// Checked between stages; `finished` is the stage that just completed
    fn ensure_not_interrupted(&self, finished: Stage) -> DeployResult<()> {
        if self.interrupt.is_raised() {
            return Err(DeployError::Interrupted { stage: finished });
        }
        Ok(())
    }

    /// Announce a stage failure and hand the error back for propagation
    fn fail(&self, stage: Stage, err: DeployError) -> DeployError {
        let detail = match &err {
            DeployError::Unreachable { detail, .. }
            | DeployError::SyncFailed { detail, .. }
            | DeployError::RemoteCommandFailed { detail, .. } => detail.clone(),
            _ => None,
        };
        self.emit(DeployEvent::StageFailed {
            stage,
            message: err.to_string(),
            detail,
        });
        err
    }

    fn emit(&self, event: DeployEvent) {
        self.events.on_event(event);
    }
}
