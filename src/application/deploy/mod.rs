//! Deploy Module
//!
//! Orchestrates the deployment flow.
//!
//! ## Structure
//!
//! - `options` - Run options (`DeployOptions`, `DeployOutputOptions`)
//! - `result` - Success report (`DeployReport`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use shipsync::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(&config, runner, events, interrupt);
//! let report = use_case.execute(&DeployOptions::default())?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, DeployOutputOptions};
pub use result::DeployReport;
pub use use_case::DeployUseCase;
