//! GitHub client implementation

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

/// Default GitHub REST API base URL
pub const API_BASE: &str = "https://api.github.com";

/// REST API version pinned through the `X-GitHub-Api-Version` header
pub const API_VERSION: &str = "2022-11-28";

/// Media type requested through the `Accept` header
pub const MEDIA_TYPE: &str = "application/vnd.github+json";

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API client for making authenticated requests
///
/// Every request sent through this client carries the same user agent, accept,
/// API version and bearer authorization headers. The client is built once and
/// never reconfigured.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_base: String,
}

impl GitHubClient {
    /// Create a client against an API base, [`API_BASE`] for github.com
    ///
    /// # Errors
    /// Returns an error if the token or user agent cannot be used as a header value,
    /// or if the underlying HTTP client cannot be built.
    pub fn with_api_base(token: &str, user_agent: &str, api_base: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).context("Invalid user agent")?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .context("GitHub token contains characters not allowed in a header")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// The API base every request URL is built from
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}
