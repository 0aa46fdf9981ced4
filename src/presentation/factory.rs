//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::config::DeployConfig;
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{InterruptFlag, SystemCommandRunner};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase<'a> = DeployUseCase<'a, SystemCommandRunner>;

/// Create a deploy use case that runs real rsync/ssh processes
pub fn create_deploy_use_case<'a>(
    config: &'a DeployConfig,
    events: Arc<dyn DeployEventSink>,
    interrupt: InterruptFlag,
) -> ConcreteDeployUseCase<'a> {
    DeployUseCase::new(config, SystemCommandRunner::new(), events, interrupt)
}
