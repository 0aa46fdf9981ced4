//! Process execution
//!
//! - `system` - `CommandRunner` backed by `std::process`, tools resolved with `which`

mod system;

pub use system::SystemCommandRunner;
