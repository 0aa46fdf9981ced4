//! Deployment stages in execution order

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Dependencies,
    Connectivity,
    Sync,
    Remote,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Dependencies,
        Stage::Connectivity,
        Stage::Sync,
        Stage::Remote,
    ];

    /// 1-based position, shown as `[n/4]`
    pub fn number(&self) -> usize {
        match self {
            Stage::Dependencies => 1,
            Stage::Connectivity => 2,
            Stage::Sync => 3,
            Stage::Remote => 4,
        }
    }

    pub fn total() -> usize {
        Self::ALL.len()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Dependencies => "Checking dependencies",
            Stage::Connectivity => "Checking SSH connection",
            Stage::Sync => "Syncing files to server",
            Stage::Remote => "Running deploy commands on server",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Dependencies => "dependencies",
            Stage::Connectivity => "connectivity",
            Stage::Sync => "sync",
            Stage::Remote => "remote",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
