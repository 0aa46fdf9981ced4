//! Configuration module for shipsync
//!
//! Configuration hierarchy:
//! 1. `--config <PATH>` (highest priority)
//! 2. Environment variables (SHIPSYNC_*), applied on top of the chosen file
//! 3. Project config (./shipsync.toml)
//! 4. User config (<config_dir>/shipsync/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    resolve, user_config_path, ConfigSource, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    default_remote_commands, ColorMode, DeployConfig, OutputConfig, PathsConfig, RemoteConfig,
    ServerConfig, SyncConfig,
};
