//! Shipsync - mirror a project to a remote host and run its deploy steps
//!
//! A deployment is five gated stages: dependency check, ssh connectivity
//! probe, rsync mirror, one ssh session running the remote command chain,
//! and a completion report.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::{DeployOptions, DeployOutputOptions, DeployReport, DeployUseCase};
pub use config::DeployConfig;
pub use error::{DeployError, DeployResult};
