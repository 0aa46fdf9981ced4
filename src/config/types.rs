//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DeployError, DeployResult};

/// Remote host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host alias as defined in `~/.ssh/config`
    #[serde(default = "default_alias")]
    pub alias: String,

    /// Address shown to the user; never used to connect
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            alias: default_alias(),
            host: default_host(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_alias() -> String {
    "aliyun".to_string()
}

fn default_host() -> String {
    "47.120.42.42".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

/// Local and remote roots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_local_path")]
    pub local: PathBuf,

    #[serde(default = "default_remote_path")]
    pub remote: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            local: default_local_path(),
            remote: default_remote_path(),
        }
    }
}

fn default_local_path() -> PathBuf {
    PathBuf::from("./")
}

fn default_remote_path() -> String {
    "/data/xiuxian_admin".to_string()
}

/// File mirroring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// rsync `--exclude` patterns, passed in this order
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
        }
    }
}

fn default_exclude() -> Vec<String> {
    [
        ".next",
        "node_modules",
        ".git",
        "__pycache__",
        "*.pyc",
        ".env.local",
        ".DS_Store",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Remote build/restart steps
///
/// The default list is derived from the default remote path. When a config
/// file overrides `paths.remote` but not `remote.commands`, the steps are
/// rebuilt so the `cd` follows the new path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RemoteConfig {
    #[serde(default)]
    pub commands: Option<Vec<String>>,
}

/// Default remote steps for a given deploy path
pub fn default_remote_commands(remote_path: &str) -> Vec<String> {
    vec![
        format!("cd {}", crate::domain::value_objects::shell_quote_path(remote_path)),
        "pnpm i".to_string(),
        "npx prisma db push".to_string(),
        "pnpm build".to_string(),
        "pm2 restart xiuxian_admin".to_string(),
    ]
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Deployment configuration, read-only once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl DeployConfig {
    /// Remote steps in execution order
    pub fn remote_commands(&self) -> Vec<String> {
        match &self.remote.commands {
            Some(commands) => commands.clone(),
            None => default_remote_commands(&self.paths.remote),
        }
    }

    /// `alias:path` destination understood by rsync
    pub fn remote_destination(&self) -> String {
        format!("{}:{}", self.server.alias, self.paths.remote)
    }

    /// Reject configurations that would make rsync or ssh misbehave
    pub fn validate(&self) -> DeployResult<()> {
        let invalid = |message: &str| {
            Err(DeployError::InvalidConfig {
                message: message.to_string(),
            })
        };

        if self.server.alias.trim().is_empty() {
            return invalid("server.alias must not be empty");
        }
        if self.server.alias.starts_with('-') {
            return invalid("server.alias must not start with '-'");
        }
        if self.server.connect_timeout_secs == 0 {
            return invalid("server.connect_timeout_secs must be greater than 0");
        }
        let remote = self.paths.remote.as_str();
        if !(remote.starts_with('/') || remote == "~" || remote.starts_with("~/")) {
            return invalid("paths.remote must be absolute or start with ~/");
        }
        if self.sync.exclude.iter().any(|p| p.trim().is_empty()) {
            return invalid("sync.exclude must not contain blank patterns");
        }

        let commands = self.remote_commands();
        if commands.is_empty() {
            return invalid("remote.commands must contain at least one command");
        }
        if commands.iter().any(|c| c.trim().is_empty()) {
            return invalid("remote.commands must not contain blank commands");
        }

        Ok(())
    }
}
