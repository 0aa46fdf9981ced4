//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::types::DeployConfig;

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "shipsync.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => {
                Some(p)
            }
            ConfigSource::Defaults => None,
        }
    }
}

/// Fully resolved configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: DeployConfig,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(DeployConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| DeployError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> DeployResult<(DeployConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: DeployConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Otherwise the project file in `cwd` wins over
/// the user file, which wins over built-in defaults. Environment overrides are
/// applied last.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> DeployResult<LoadedConfig> {
    resolve_with(explicit, cwd, user_config_path(), |key| std::env::var(key).ok())
}

pub(crate) fn resolve_with(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> DeployResult<LoadedConfig> {
    let source = if let Some(path) = explicit {
        ConfigSource::Explicit(path.to_path_buf())
    } else if cwd.join(PROJECT_CONFIG_FILE).is_file() {
        ConfigSource::Project(cwd.join(PROJECT_CONFIG_FILE))
    } else {
        match user_config {
            Some(path) if path.is_file() => ConfigSource::User(path),
            _ => ConfigSource::Defaults,
        }
    };

    let (config, warnings) = match source.path() {
        Some(path) => load_with_warnings(path)?,
        None => (DeployConfig::default(), Vec::new()),
    };

    let config = with_env_overrides(config, get_env);
    config.validate()?;

    Ok(LoadedConfig {
        config,
        source,
        warnings,
    })
}

/// Apply environment variable overrides (SHIPSYNC_* prefix)
pub fn with_env_overrides(
    mut config: DeployConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> DeployConfig {
    if let Some(alias) = get_env("SHIPSYNC_SERVER_ALIAS") {
        config.server.alias = alias;
    }

    if let Some(host) = get_env("SHIPSYNC_SERVER_HOST") {
        config.server.host = host;
    }

    if let Some(remote) = get_env("SHIPSYNC_REMOTE_PATH") {
        config.paths.remote = remote;
    }

    if let Some(local) = get_env("SHIPSYNC_LOCAL_PATH") {
        config.paths.local = PathBuf::from(local);
    }

    // Unparseable values are ignored rather than silently becoming 0
    if let Some(timeout) = get_env("SHIPSYNC_CONNECT_TIMEOUT") {
        if let Ok(secs) = timeout.trim().parse::<u64>() {
            config.server.connect_timeout_secs = secs;
        }
    }

    config
}

/// `<config_dir>/shipsync/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shipsync").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "server",
        "alias",
        "host",
        "connect_timeout_secs",
        "paths",
        "local",
        "remote",
        "sync",
        "exclude",
        "commands",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
