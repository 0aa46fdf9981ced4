//! Test environment builder for isolated shipsync runs.
//!
//! The binary runs with a cleared environment whose PATH contains only a
//! temp directory of shell-script stand-ins for rsync and ssh. Each stand-in
//! appends `<name> <args...>` to a shared log before running its body.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the shipsync binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment: project dir, HOME, and a PATH holding only fake tools
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    pub bin_dir: TempDir,
    shipsync_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin_dir: TempDir::new().expect("Failed to create bin dir"),
            shipsync_bin: PathBuf::from(env!("CARGO_BIN_EXE_shipsync")),
        }
    }

    /// Environment with rsync and ssh stand-ins that always succeed
    pub fn with_working_tools() -> Self {
        let env = Self::new();
        env.install_tool("rsync", "exit 0");
        env.install_tool("ssh", "exit 0");
        env
    }

    /// Install an executable named `name` whose behaviour is the shell `body`
    pub fn install_tool(&self, name: &str, body: &str) {
        let path = self.bin_dir.path().join(name);
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"{name} $*\" >> '{log}'\n{body}\n",
            log = self.log_path().display(),
        );
        fs::write(&path, script).expect("Failed to write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake tool");
    }

    /// Write a file relative to the project root
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_root.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Every fake tool call, in order, as `<name> <args joined by spaces>`
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.shipsync_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_clear()
            .env("PATH", self.bin_dir.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("LANG", "C");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute shipsync");
        output_to_result(output)
    }

    fn log_path(&self) -> PathBuf {
        self.home_dir.path().join("calls.log")
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
