//! Repository entry parsing

use std::fmt;
use url::Url;

/// An (owner, name) pair identifying one target repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse a repository entry into an owner/name pair
    ///
    /// Accepts either an absolute URL, whose first two path segments are used, or
    /// slash-separated shorthand such as `owner/name`. Empty segments are skipped and
    /// anything past the second segment is ignored. A trailing `.git` is dropped from
    /// the name.
    ///
    /// Returns `None` when fewer than two segments are found.
    pub fn parse(entry: &str) -> Option<Self> {
        let entry = entry.trim();
        if entry.is_empty() {
            return None;
        }

        if let Ok(url) = Url::parse(entry) {
            let segments: Vec<&str> = url
                .path_segments()
                .map(|s| s.filter(|s| !s.is_empty()).collect())
                .unwrap_or_default();
            return Self::from_segments(&segments);
        }

        let parts: Vec<&str> = entry.split('/').filter(|s| !s.is_empty()).collect();
        Self::from_segments(&parts)
    }

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            [owner, name, ..] => {
                let name = name.strip_suffix(".git").unwrap_or(*name);
                if name.is_empty() {
                    return None;
                }
                Some(Self::new(*owner, name))
            }
            _ => None,
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_url() {
        let repo = RepositoryRef::parse("https://github.com/owner/repo").unwrap();
        assert_eq!(repo, RepositoryRef::new("owner", "repo"));
    }

    #[test]
    fn test_parse_url_ignores_extra_segments() {
        let repo = RepositoryRef::parse("https://example.com/ownerX/repoY/extra").unwrap();
        assert_eq!(repo, RepositoryRef::new("ownerX", "repoY"));
    }

    #[test]
    fn test_parse_url_with_git_suffix() {
        let repo = RepositoryRef::parse("https://github.com/owner/repo.git").unwrap();
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_url_with_empty_segments() {
        let repo = RepositoryRef::parse("https://github.com//owner//repo/").unwrap();
        assert_eq!(repo, RepositoryRef::new("owner", "repo"));
    }

    #[test]
    fn test_parse_url_with_single_segment() {
        assert!(RepositoryRef::parse("https://github.com/owner").is_none());
        assert!(RepositoryRef::parse("https://github.com/").is_none());
    }

    #[test]
    fn test_parse_shorthand() {
        let repo = RepositoryRef::parse("ownerX/repoY").unwrap();
        assert_eq!(repo, RepositoryRef::new("ownerX", "repoY"));
    }

    #[test]
    fn test_parse_shorthand_with_surrounding_slashes() {
        let repo = RepositoryRef::parse("/ownerX/repoY/").unwrap();
        assert_eq!(repo, RepositoryRef::new("ownerX", "repoY"));
    }

    #[test]
    fn test_parse_owner_only_is_invalid() {
        assert!(RepositoryRef::parse("ownerX").is_none());
        assert!(RepositoryRef::parse("ownerX/").is_none());
        assert!(RepositoryRef::parse("").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(RepositoryRef::new("a", "b").to_string(), "a/b");
    }
}
