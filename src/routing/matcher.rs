//! Route matching logic.
//!
//! # Responsibilities
//! - Match request paths against a channel's prefix
//! - Compute the path forwarded upstream
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Prefixes match whole segments: `/openai` matches `/openai/v1` but not `/openaix`
//! - No regex to guarantee O(n) matching

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher. Trailing slashes are ignored.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Number of path bytes the prefix covers; longer is more specific.
    pub fn specificity(&self) -> usize {
        self.prefix.len()
    }

    /// Returns true if the path falls under this prefix.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Path with the prefix removed, always starting with `/`.
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        match path.strip_prefix(self.prefix.as_str()) {
            Some("") => "/",
            Some(rest) => rest,
            None => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/openai");
        assert!(matcher.matches("/openai"));
        assert!(matcher.matches("/openai/v1/chat/completions"));
        assert!(!matcher.matches("/openaix"));
        assert!(!matcher.matches("/anthropic/v1"));
    }

    #[test]
    fn test_root_prefix_matches_everything() {
        let matcher = PathPrefixMatcher::new("/");
        assert!(matcher.matches("/"));
        assert!(matcher.matches("/v1/models"));
        assert_eq!(matcher.strip("/v1/models"), "/v1/models");
        assert_eq!(matcher.specificity(), 0);
    }

    #[test]
    fn test_strip_prefix() {
        let matcher = PathPrefixMatcher::new("/openai/");
        assert_eq!(matcher.strip("/openai/v1/models"), "/v1/models");
        assert_eq!(matcher.strip("/openai"), "/");
    }
}
