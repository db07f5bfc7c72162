//! Issue posting across repositories
//!
//! Repositories are processed in list order and prompt files in loader order, one
//! request at a time. Nothing is retried; a failed posting is reported and the run
//! moves on.

use crate::constants::github::POST_DELAY;
use crate::loaders::PromptFile;
use crate::reporter::Reporter;
use fanout_github::{GitHubClient, NewIssue, RepositoryRef};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Postings announced in dry-run mode
    pub planned: usize,
    pub created: usize,
    pub already_existed: usize,
    pub failed: usize,
    pub invalid_entries: usize,
}

enum Outcome {
    Created,
    AlreadyExists,
    Failed,
}

pub struct IssuePoster<'a> {
    client: &'a GitHubClient,
    dry_run: bool,
    delay: Duration,
}

impl<'a> IssuePoster<'a> {
    pub fn new(client: &'a GitHubClient, dry_run: bool) -> Self {
        Self {
            client,
            dry_run,
            delay: POST_DELAY,
        }
    }

    /// Override the pause between postings
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Post every prompt file to every repository entry
    ///
    /// Invalid entries are reported and skipped. In dry-run mode nothing is sent and
    /// there is no pause between postings.
    pub async fn post_all<O: Write, E: Write>(
        &self,
        entries: &[String],
        prompts: &[PromptFile],
        reporter: &mut Reporter<O, E>,
    ) -> RunSummary {
        let mut summary = RunSummary::default();

        for entry in entries {
            let Some(repo) = RepositoryRef::parse(entry) else {
                debug!(%entry, "invalid repository entry");
                reporter.invalid_entry(entry);
                summary.invalid_entries += 1;
                continue;
            };

            reporter.target_repo(&repo);

            for prompt in prompts {
                reporter.posting(&prompt.title, &prompt.file_name, self.dry_run);

                if self.dry_run {
                    summary.planned += 1;
                    continue;
                }

                match self.post_one(&repo, prompt, reporter).await {
                    Outcome::Created => summary.created += 1,
                    Outcome::AlreadyExists => summary.already_existed += 1,
                    Outcome::Failed => summary.failed += 1,
                }

                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
            }
        }

        summary
    }

    async fn post_one<O: Write, E: Write>(
        &self,
        repo: &RepositoryRef,
        prompt: &PromptFile,
        reporter: &mut Reporter<O, E>,
    ) -> Outcome {
        if self.issue_exists(repo, &prompt.title, reporter).await {
            reporter.already_exists(&prompt.title, repo);
            return Outcome::AlreadyExists;
        }

        let issue = NewIssue {
            title: &prompt.title,
            body: &prompt.body,
        };
        match self.client.create_issue(repo, issue).await {
            Ok(created) => {
                info!(
                    repo = %repo,
                    title = %prompt.title,
                    number = ?created.number,
                    url = ?created.html_url,
                    "issue created"
                );
                reporter.created(&created);
                Outcome::Created
            }
            Err(e) => {
                debug!(repo = %repo, error = %e, "issue creation failed");
                reporter.create_failed(&e);
                Outcome::Failed
            }
        }
    }

    /// Look for an issue with the same title among the 100 most recent issues
    ///
    /// Fails open: any error counts as "no such issue".
    async fn issue_exists<O: Write, E: Write>(
        &self,
        repo: &RepositoryRef,
        title: &str,
        reporter: &mut Reporter<O, E>,
    ) -> bool {
        match self.client.list_issues(repo).await {
            Ok(issues) => issues.iter().any(|issue| issue.has_title(title)),
            Err(e) => {
                reporter.lookup_failed(&e);
                false
            }
        }
    }
}
