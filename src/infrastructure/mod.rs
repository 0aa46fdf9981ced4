//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and terminal I/O.
//!
//! ## Structure
//!
//! - `process/` - PATH lookup and the OS-backed `CommandRunner`
//! - `sync/` - rsync and ssh invocation builders
//! - `events/` - Event sinks (JSON)
//! - `interrupt` - Ctrl+C flag

pub mod events;
pub mod interrupt;
pub mod process;
pub mod sync;

// Re-export for convenience
pub use events::JsonEventSink;
pub use interrupt::InterruptFlag;
pub use process::SystemCommandRunner;
pub use sync::{RsyncTransfer, SshClient, REQUIRED_TOOLS};
