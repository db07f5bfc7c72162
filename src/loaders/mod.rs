//! Input loaders for the repository list and the prompts directory

pub mod prompts;
pub mod repositories;

pub use prompts::{PromptFile, issue_title, load_prompt_files};
pub use repositories::{load_repository_lines, parse_repository_lines};
