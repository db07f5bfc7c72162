//! Command line parsing and run option resolution
//!
//! Parsing is deliberately lenient: unknown arguments are ignored and a value flag
//! in last position (with nothing after it) is ignored too.

use super::credentials::{CredentialSource, EnvSource, resolve_token};
use super::validation::{PreconditionError, validate_input_paths};
use crate::constants;
use fanout_github::API_BASE;
use secrecy::SecretString;
use std::path::PathBuf;

/// Raw command line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub repos_path: PathBuf,
    pub prompts_dir: PathBuf,
    pub token: Option<String>,
    pub dry_run: bool,
    pub show_help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            repos_path: PathBuf::from(constants::cli::DEFAULT_REPOS_FILE),
            prompts_dir: PathBuf::from(constants::cli::DEFAULT_PROMPTS_DIR),
            token: None,
            dry_run: false,
            show_help: false,
        }
    }
}

impl CliArgs {
    /// Parse arguments (without the program name)
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut parsed = Self::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--repos" | "-r" => {
                    if let Some(value) = args.get(i + 1) {
                        parsed.repos_path = PathBuf::from(value);
                        i += 1;
                    }
                }
                "--prompts" | "-p" => {
                    if let Some(value) = args.get(i + 1) {
                        parsed.prompts_dir = PathBuf::from(value);
                        i += 1;
                    }
                }
                "--token" | "-t" => {
                    if let Some(value) = args.get(i + 1) {
                        parsed.token = Some(value.clone());
                        i += 1;
                    }
                }
                "--dry-run" => parsed.dry_run = true,
                "--help" | "-h" => parsed.show_help = true,
                _ => {}
            }
            i += 1;
        }

        parsed
    }
}

/// Fully resolved options for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub repos_path: PathBuf,
    pub prompts_dir: PathBuf,
    pub token: SecretString,
    pub dry_run: bool,
    pub api_base: String,
}

impl RunOptions {
    /// Resolve the token and check the input paths
    ///
    /// Checks run in a fixed order: token, repos file, prompts directory.
    pub fn resolve(
        args: CliArgs,
        env: &dyn EnvSource,
        secrets: &dyn CredentialSource,
    ) -> Result<Self, PreconditionError> {
        let token =
            resolve_token(args.token, env, secrets).ok_or(PreconditionError::MissingToken)?;

        validate_input_paths(&args.repos_path, &args.prompts_dir)?;

        let api_base = env
            .var(constants::env::API_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| API_BASE.to_string());

        Ok(Self {
            repos_path: args.repos_path,
            prompts_dir: args.prompts_dir,
            token,
            dry_run: args.dry_run,
            api_base,
        })
    }
}

/// Usage text printed for `--help`
pub fn usage() -> String {
    format!(
        "\
issue-fanout - create GitHub issues from prompt files in multiple repositories

Usage:
  issue-fanout [--repos <path>] [--prompts <path>] [--token <token>] [--dry-run]

Options:
  --repos, -r    Path to repos file (default: {repos}). Each line is 'owner/repo' or a
                 repository URL. Blank lines and lines starting with # are ignored.
  --prompts, -p  Path to prompts folder (default: {prompts}). Every non-hidden file
                 becomes one issue; the file name is the title, the contents the body.
  --token, -t    GitHub token. If omitted GITHUB_TOKEN, GH_TOKEN, then the secrets
                 file ({secrets_env} or <config dir>/{app}/{file}) are used.
  --dry-run      Don't create issues; just show what would be done.
  --help, -h     Show this help.

Environment:
  {api_env}  API base URL (default: {api_base})
  RUST_LOG        Diagnostic log filter, e.g. issue_fanout=debug
",
        repos = constants::cli::DEFAULT_REPOS_FILE,
        prompts = constants::cli::DEFAULT_PROMPTS_DIR,
        secrets_env = constants::env::SECRETS_FILE,
        app = constants::secrets::APP_DIR,
        file = constants::secrets::FILE_NAME,
        api_env = constants::env::API_URL,
        api_base = API_BASE,
    )
}
