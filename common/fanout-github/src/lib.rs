//! GitHub API client library
//!
//! This library provides the small slice of the GitHub REST API needed to
//! fan issues out across repositories.
//!
//! ## Modules
//!
//! - [`client`]: Pre-configured, authenticated HTTP client
//! - [`issues`]: Listing and creating issues
//! - [`repository`]: Parsing repository entries into owner/name pairs

mod client;
mod issues;
mod repository;

// Re-export public API
pub use client::{API_BASE, GitHubClient};
pub use issues::{ApiError, CreatedIssue, IssueSummary, NewIssue};
pub use repository::RepositoryRef;
