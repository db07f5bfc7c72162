//! Repository list loading

use crate::config::PreconditionError;
use crate::utils::read_text;
use std::path::Path;

/// Keep the meaningful lines of a repository list
///
/// Lines are trimmed; blank lines and `#` comments are dropped. Order is preserved.
pub fn parse_repository_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read the repository list file
///
/// # Errors
/// [`PreconditionError::NoRepositories`] when no usable line remains, or
/// [`PreconditionError::Unreadable`] when the file cannot be read.
pub fn load_repository_lines(path: &Path) -> Result<Vec<String>, PreconditionError> {
    let content = read_text(path).map_err(|source| PreconditionError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = parse_repository_lines(&content);
    if lines.is_empty() {
        return Err(PreconditionError::NoRepositories);
    }
    Ok(lines)
}
