//! Utility modules for common functionality

pub mod exit_codes;
pub mod filesystem;
pub mod sanitizers;

// Re-export commonly used functions
pub use exit_codes::get_exit_code_description;
pub use filesystem::read_text;
pub use sanitizers::truncate_chars;
