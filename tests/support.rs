//! Common test support utilities and fixtures
//!
//! Shared by the integration tests through `mod support;`.

#![allow(dead_code)]

use issue_fanout::config::CliArgs;
use issue_fanout::Reporter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, process::Command};
use tempfile::TempDir;

/// Result of running the CLI binary
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A temporary directory holding a repos file and a prompts folder
pub struct Workspace {
    pub root: TempDir,
    pub repos_path: PathBuf,
    pub prompts_dir: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a workspace with an empty prompts folder and no repos file yet
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let repos_path = root.path().join("repos.md");
        let prompts_dir = root.path().join("prompts");
        fs::create_dir(&prompts_dir).expect("Failed to create prompts dir");
        Self {
            root,
            repos_path,
            prompts_dir,
        }
    }

    pub fn write_repos(&self, content: &str) {
        fs::write(&self.repos_path, content).expect("Failed to write repos file");
    }

    pub fn write_prompt(&self, file_name: &str, body: &str) {
        fs::write(self.prompts_dir.join(file_name), body).expect("Failed to write prompt");
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Arguments pointing at this workspace
    pub fn args(&self) -> CliArgs {
        CliArgs {
            repos_path: self.repos_path.clone(),
            prompts_dir: self.prompts_dir.clone(),
            ..CliArgs::default()
        }
    }

    pub fn repos_str(&self) -> &str {
        self.repos_path.to_str().expect("Repos path not UTF-8")
    }

    pub fn prompts_str(&self) -> &str {
        self.prompts_dir.to_str().expect("Prompts path not UTF-8")
    }
}

/// Build an environment map from pairs
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Reporter capturing plain (uncolored) output in memory
pub fn capture() -> Reporter<Vec<u8>, Vec<u8>> {
    colored::control::set_override(false);
    Reporter::new(Vec::new(), Vec::new())
}

/// Captured stdout and stderr as strings
pub fn output(reporter: Reporter<Vec<u8>, Vec<u8>>) -> (String, String) {
    let (out, err) = reporter.into_parts();
    (
        String::from_utf8(out).expect("stdout not UTF-8"),
        String::from_utf8(err).expect("stderr not UTF-8"),
    )
}

/// Run the issue-fanout binary with a controlled environment
///
/// Token variables are removed and the secrets file is pointed at a path that does
/// not exist, so only what the test passes is visible.
pub fn run_cli(args: &[&str], extra_env: &[(&str, &str)]) -> CliOutput {
    let missing_secrets = std::env::temp_dir().join("issue-fanout-tests-no-secrets.yaml");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_issue-fanout"));
    cmd.args(args)
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN")
        .env_remove("GITHUB_API_URL")
        .env_remove("RUST_LOG")
        .env("ISSUE_FANOUT_SECRETS", &missing_secrets)
        .env("NO_COLOR", "1");
    for (key, value) in extra_env {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("Failed to execute issue-fanout");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
