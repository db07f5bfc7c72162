//! Issue operations

use crate::client::GitHubClient;
use crate::repository::RepositoryRef;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Number of issues fetched by a single listing request (the API maximum)
const LIST_PAGE_SIZE: u32 = 100;

/// Payload for creating an issue
#[derive(Serialize, Debug, Clone, Copy)]
pub struct NewIssue<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// The subset of a listed issue needed for duplicate detection
#[derive(Deserialize, Debug, Clone, Default)]
pub struct IssueSummary {
    #[serde(default)]
    pub title: Option<String>,
}

impl IssueSummary {
    /// Case-insensitive exact comparison against a candidate title
    ///
    /// Characters are lowercased one at a time, so context rules such as the Greek
    /// final sigma do not apply.
    pub fn has_title(&self, title: &str) -> bool {
        match self.title.as_deref() {
            Some(existing) if !existing.is_empty() => existing
                .chars()
                .flat_map(char::to_lowercase)
                .eq(title.chars().flat_map(char::to_lowercase)),
            _ => false,
        }
    }
}

/// Response of a successful issue creation
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CreatedIssue {
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub number: Option<u64>,
}

/// A non-success HTTP response from the GitHub API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GitHub API error ({} {})", self.status, self.reason)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        }
    }
}

impl GitHubClient {
    /// List the most recent issues of a repository, open and closed
    ///
    /// Only the first page of up to 100 issues is fetched; there is no pagination.
    /// A response body that is valid JSON but not an array yields an empty list.
    ///
    /// # Errors
    /// Returns [`ApiError`] (inside `anyhow::Error`) on a non-success status, or a
    /// plain error on transport failures and undecodable bodies.
    pub async fn list_issues(&self, repo: &RepositoryRef) -> Result<Vec<IssueSummary>> {
        let url = format!(
            "{}/repos/{}/{}/issues?state=all&per_page={}",
            self.api_base, repo.owner, repo.name, LIST_PAGE_SIZE
        );
        debug!(%url, "listing issues");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await.into());
        }

        let text = response.text().await?;
        let value: Value =
            serde_json::from_str(&text).context("Failed to parse issue listing response")?;

        let issues = match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
            _ => Vec::new(),
        };
        Ok(issues)
    }

    /// Create an issue in a repository
    ///
    /// A success response whose body cannot be decoded still counts as a created
    /// issue, just without a URL.
    ///
    /// # Errors
    /// Returns [`ApiError`] (inside `anyhow::Error`) on a non-success status, or a
    /// plain error on transport failures.
    pub async fn create_issue(
        &self,
        repo: &RepositoryRef,
        issue: NewIssue<'_>,
    ) -> Result<CreatedIssue> {
        let url = format!(
            "{}/repos/{}/{}/issues",
            self.api_base, repo.owner, repo.name
        );
        debug!(%url, title = issue.title, "creating issue");

        let response = self.client.post(&url).json(&issue).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await.into());
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }
}
