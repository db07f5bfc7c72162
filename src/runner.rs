//! Top-level run sequencing
//!
//! Order is fixed: help, token, repos file, prompts directory, repository list,
//! prompt files, HTTP client, postings. Every configuration failure stops the run
//! before any request is made.

use crate::config::{
    CliArgs, CredentialSource, EnvSource, PreconditionError, RunOptions, usage,
};
use crate::constants::github::{POST_DELAY, USER_AGENT};
use crate::loaders::{load_prompt_files, load_repository_lines};
use crate::poster::{IssuePoster, RunSummary};
use crate::reporter::Reporter;
use crate::utils::exit_codes;
use fanout_github::GitHubClient;
use secrecy::ExposeSecret;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

pub struct FanoutRunner<'a> {
    env: &'a dyn EnvSource,
    secrets: &'a dyn CredentialSource,
    post_delay: Duration,
}

impl<'a> FanoutRunner<'a> {
    pub fn new(env: &'a dyn EnvSource, secrets: &'a dyn CredentialSource) -> Self {
        Self {
            env,
            secrets,
            post_delay: POST_DELAY,
        }
    }

    /// Override the pause between live postings
    pub fn with_post_delay(mut self, delay: Duration) -> Self {
        self.post_delay = delay;
        self
    }

    /// Run to completion and return the process exit code
    ///
    /// Posting failures are reported but do not change the exit code; only
    /// configuration failures exit non-zero.
    pub async fn run<O: Write, E: Write>(
        &self,
        args: CliArgs,
        reporter: &mut Reporter<O, E>,
    ) -> i32 {
        if args.show_help {
            reporter.usage(&usage());
            return exit_codes::SUCCESS;
        }

        match self.execute(args, reporter).await {
            Ok(summary) => {
                debug!(?summary, "run finished");
                exit_codes::SUCCESS
            }
            Err(e) => {
                reporter.fatal(&e);
                let code = e.exit_code();
                debug!(
                    code,
                    reason = exit_codes::get_exit_code_description(code),
                    "run aborted"
                );
                code
            }
        }
    }

    async fn execute<O: Write, E: Write>(
        &self,
        args: CliArgs,
        reporter: &mut Reporter<O, E>,
    ) -> Result<RunSummary, PreconditionError> {
        let options = RunOptions::resolve(args, self.env, self.secrets)?;

        let entries = load_repository_lines(&options.repos_path)?;
        let prompts = load_prompt_files(&options.prompts_dir)?;
        info!(
            repositories = entries.len(),
            prompts = prompts.len(),
            dry_run = options.dry_run,
            "inputs loaded"
        );

        let client = GitHubClient::with_api_base(
            options.token.expose_secret(),
            USER_AGENT,
            &options.api_base,
        )
        .map_err(PreconditionError::Client)?;

        let summary = IssuePoster::new(&client, options.dry_run)
            .with_delay(self.post_delay)
            .post_all(&entries, &prompts, reporter)
            .await;

        reporter.summary(&summary, options.dry_run);
        Ok(summary)
    }
}
