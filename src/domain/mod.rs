//! Domain Layer
//!
//! Pure deployment concepts without process or terminal I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Invocation, RemoteChain, Stage)
//! - `ports/` - Interface definitions for infrastructure (CommandRunner, DeployEventSink)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or prints directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod value_objects;
