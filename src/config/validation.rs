//! Precondition checks run before any network activity

use crate::utils::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration failures that abort the run with exit code 1
///
/// Each variant renders as the single line printed to stderr.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("No GitHub token provided. Set GITHUB_TOKEN or GH_TOKEN, or pass --token <token>.")]
    MissingToken,

    #[error("Repos file not found: {}", .0.display())]
    ReposFileNotFound(PathBuf),

    #[error("Prompts folder not found: {}", .0.display())]
    PromptsDirNotFound(PathBuf),

    #[error("No repositories found in repos file.")]
    NoRepositories,

    #[error("No prompt files found in prompts folder.")]
    NoPromptFiles,

    #[error("Failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to set up the GitHub client: {0:#}")]
    Client(anyhow::Error),
}

impl PreconditionError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        exit_codes::PRECONDITION_FAILED
    }
}

/// Validate that both input locations exist
///
/// The repos path must be a regular file and the prompts path a directory. The
/// token check happens before this, so a missing token is always reported first.
pub fn validate_input_paths(repos_path: &Path, prompts_dir: &Path) -> Result<(), PreconditionError> {
    if !repos_path.is_file() {
        return Err(PreconditionError::ReposFileNotFound(repos_path.to_path_buf()));
    }

    if !prompts_dir.is_dir() {
        return Err(PreconditionError::PromptsDirNotFound(prompts_dir.to_path_buf()));
    }

    Ok(())
}
