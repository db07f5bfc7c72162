//! issue-fanout - create one GitHub issue per prompt file in every listed repository

pub mod config;
pub mod constants;
pub mod loaders;
pub mod logging;
pub mod poster;
pub mod reporter;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use config::{CliArgs, RunOptions};
pub use fanout_github::RepositoryRef;
pub use loaders::PromptFile;
pub use poster::{IssuePoster, RunSummary};
pub use reporter::Reporter;
pub use runner::FanoutRunner;
