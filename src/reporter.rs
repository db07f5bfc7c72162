//! Console reporting
//!
//! All user-facing output goes through [`Reporter`]. Progress and successes go to
//! the `out` writer, warnings and failures to `err`. Writes that fail (closed pipe)
//! are dropped; reporting never aborts a run.

use crate::poster::RunSummary;
use colored::*;
use fanout_github::{ApiError, CreatedIssue, RepositoryRef};
use std::io::{self, Stderr, Stdout, Write};

pub struct Reporter<O = Stdout, E = Stderr> {
    out: O,
    err: E,
}

impl Reporter {
    /// Reporter writing to the process stdout and stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Give back the writers, e.g. to inspect captured output
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn out(&mut self, line: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}", line.as_ref());
    }

    fn err(&mut self, line: impl AsRef<str>) {
        let _ = writeln!(self.err, "{}", line.as_ref());
    }

    pub fn usage(&mut self, text: &str) {
        let _ = write!(self.out, "{}", text);
    }

    /// A configuration failure, one line
    pub fn fatal(&mut self, message: impl std::fmt::Display) {
        self.err(format!("{}", message).red().to_string());
    }

    pub fn invalid_entry(&mut self, entry: &str) {
        self.out(format!("{} {}", "Skipping invalid repo entry:".yellow(), entry));
    }

    pub fn target_repo(&mut self, repo: &RepositoryRef) {
        self.out(format!("Target repo: {}", repo.to_string().cyan().bold()));
    }

    pub fn posting(&mut self, title: &str, file_name: &str, dry_run: bool) {
        let suffix = if dry_run {
            format!(" {}", "(dry-run)".dimmed())
        } else {
            String::new()
        };
        self.out(format!(
            " -> Posting issue '{}' from '{}'{}",
            title, file_name, suffix
        ));
    }

    pub fn already_exists(&mut self, title: &str, repo: &RepositoryRef) {
        self.out(format!(
            "   {} issue with title '{}' already exists in {}.",
            "Skipping:".yellow(),
            title,
            repo
        ));
    }

    /// The duplicate check failed; the run carries on as if nothing matched
    pub fn lookup_failed(&mut self, error: &anyhow::Error) {
        let prefix = "Warning: could not check existing issues:".yellow();
        match error.downcast_ref::<ApiError>() {
            Some(api) => {
                self.err(format!("   {} {} {}", prefix, api.status, api.reason));
                self.err(format!("   Response: {}", api.body));
            }
            None => self.err(format!("   {} {:#}", prefix, error)),
        }
    }

    pub fn created(&mut self, issue: &CreatedIssue) {
        match issue.html_url.as_deref() {
            Some(url) => self.out(format!("   {} {}", "Created:".green(), url)),
            None => self.out(format!("   {}", "Created (no url returned).".green())),
        }
    }

    pub fn create_failed(&mut self, error: &anyhow::Error) {
        match error.downcast_ref::<ApiError>() {
            Some(api) => {
                self.err(format!(
                    "   {} {} {}",
                    "Failed:".red(),
                    api.status,
                    api.reason
                ));
                self.err(format!("   Response: {}", api.body));
            }
            None => self.err(format!("   {} {:#}", "Error posting issue:".red(), error)),
        }
    }

    pub fn summary(&mut self, summary: &RunSummary, dry_run: bool) {
        let mut parts = Vec::new();
        if dry_run {
            parts.push(format!("{} planned", summary.planned));
        } else {
            parts.push(format!("{} created", summary.created));
            parts.push(format!("{} already existed", summary.already_existed));
            parts.push(format!("{} failed", summary.failed));
        }
        if summary.invalid_entries > 0 {
            parts.push(format!("{} invalid repo entries", summary.invalid_entries));
        }

        let line = format!("Summary: {}", parts.join(", "));
        if summary.failed > 0 || summary.invalid_entries > 0 {
            self.out(line.yellow().to_string());
        } else {
            self.out(line.green().to_string());
        }
        self.out("Done.");
    }
}
