//! Central constants for the issue-fanout application

/// Default values for command line options
pub mod cli {
    /// Default repositories list file
    pub const DEFAULT_REPOS_FILE: &str = "repos.md";

    /// Default prompts directory
    pub const DEFAULT_PROMPTS_DIR: &str = "prompts";
}

/// Environment variables consulted at startup
pub mod env {
    /// Token variables, in lookup order
    pub const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

    /// Overrides the GitHub REST API base URL
    pub const API_URL: &str = "GITHUB_API_URL";

    /// Overrides the location of the secrets file
    pub const SECRETS_FILE: &str = "ISSUE_FANOUT_SECRETS";
}

/// Default values for GitHub operations
pub mod github {
    use std::time::Duration;

    /// User-Agent header for API requests
    pub const USER_AGENT: &str = concat!("issue-fanout/", env!("CARGO_PKG_VERSION"));

    /// Issue titles longer than this many characters are truncated
    pub const MAX_TITLE_CHARS: usize = 200;

    /// Pause between issue postings to stay clear of secondary rate limits
    pub const POST_DELAY: Duration = Duration::from_millis(500);
}

/// Secrets file location
pub mod secrets {
    /// Directory under the user's config dir
    pub const APP_DIR: &str = "issue-fanout";

    /// File name inside [`APP_DIR`]
    pub const FILE_NAME: &str = "secrets.yaml";
}
