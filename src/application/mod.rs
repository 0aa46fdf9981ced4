//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Dependency check, connectivity check, file sync, remote commands

pub mod deploy;

pub use deploy::{DeployOptions, DeployOutputOptions, DeployReport, DeployUseCase};
