//! Domain Value Objects
//!
//! Immutable value types that represent deployment concepts.

mod invocation;
mod remote_chain;
mod shell;
mod stage;

pub use invocation::Invocation;
pub use remote_chain::RemoteChain;
pub use shell::{shell_quote, shell_quote_path};
pub use stage::Stage;
