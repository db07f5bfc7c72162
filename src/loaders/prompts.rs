//! Prompt file loading

use crate::config::PreconditionError;
use crate::constants::github::MAX_TITLE_CHARS;
use crate::utils::{read_text, truncate_chars};
use std::path::Path;

/// One prompt file: its name becomes the issue title, its contents the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptFile {
    pub file_name: String,
    pub title: String,
    pub body: String,
}

/// Derive an issue title from a file name
///
/// The last extension is dropped (`a.b.md` gives `a.b`) and the result is cut to
/// [`MAX_TITLE_CHARS`] characters.
pub fn issue_title(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    truncate_chars(&stem, MAX_TITLE_CHARS).to_string()
}

/// Read every non-hidden regular file directly inside `dir`, sorted by file name
///
/// # Errors
/// [`PreconditionError::NoPromptFiles`] when nothing qualifies, or
/// [`PreconditionError::Unreadable`] when the directory or a file cannot be read.
pub fn load_prompt_files(dir: &Path) -> Result<Vec<PromptFile>, PreconditionError> {
    let unreadable = |path: &Path, source| PreconditionError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| unreadable(dir, e))? {
        let entry = entry.map_err(|e| unreadable(dir, e))?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with('.') || !path.is_file() {
            continue;
        }
        paths.push((file_name, path));
    }

    if paths.is_empty() {
        return Err(PreconditionError::NoPromptFiles);
    }

    paths.sort_by(|a, b| a.0.cmp(&b.0));

    paths
        .into_iter()
        .map(|(file_name, path)| -> Result<PromptFile, PreconditionError> {
            let body = read_text(&path).map_err(|e| unreadable(&path, e))?;
            Ok(PromptFile {
                title: issue_title(&file_name),
                file_name,
                body,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_issue_title_drops_extension() {
        assert_eq!(issue_title("Add logging.md"), "Add logging");
        assert_eq!(issue_title("v1.2 release notes.txt"), "v1.2 release notes");
        assert_eq!(issue_title("no-extension"), "no-extension");
    }

    #[test]
    fn test_issue_title_truncated_to_200_chars() {
        let file_name = format!("{}.md", "x".repeat(250));
        let title = issue_title(&file_name);
        assert_eq!(title.chars().count(), 200);
        assert_eq!(title, "x".repeat(200));
    }

    #[test]
    fn test_issue_title_at_limit_untouched() {
        let stem = "y".repeat(200);
        assert_eq!(issue_title(&format!("{stem}.txt")), stem);
    }

    #[test]
    fn test_load_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("b-second.md"), "second body").unwrap();
        fs::write(dir.join("a-first.txt"), "first body").unwrap();
        fs::write(dir.join(".hidden.md"), "ignored").unwrap();
        fs::create_dir(dir.join("nested")).unwrap();
        fs::write(dir.join("nested").join("deep.md"), "ignored").unwrap();

        let prompts = load_prompt_files(dir).unwrap();
        assert_eq!(
            prompts,
            vec![
                PromptFile {
                    file_name: "a-first.txt".to_string(),
                    title: "a-first".to_string(),
                    body: "first body".to_string(),
                },
                PromptFile {
                    file_name: "b-second.md".to_string(),
                    title: "b-second".to_string(),
                    body: "second body".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_load_only_hidden_files_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".gitkeep"), "").unwrap();

        let err = load_prompt_files(temp_dir.path()).unwrap_err();
        assert!(matches!(err, PreconditionError::NoPromptFiles));
        assert_eq!(err.to_string(), "No prompt files found in prompts folder.");
    }

    #[test]
    fn test_load_keeps_body_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let body = "# Heading\n\n- item\r\n  trailing spaces   \n";
        fs::write(temp_dir.path().join("prompt.md"), body).unwrap();

        let prompts = load_prompt_files(temp_dir.path()).unwrap();
        assert_eq!(prompts[0].body, body);
    }
}
