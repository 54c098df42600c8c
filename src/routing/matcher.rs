//! Route path matching logic.
//!
//! # Responsibilities
//! - Reduce a location to the path component used for matching
//! - Compare a path against a declared route path
//!
//! # Design Decisions
//! - Query string and fragment never take part in matching
//! - A single trailing slash is optional (`/quiz/` matches `/quiz`)
//! - Comparison is case-insensitive (`/QUIZ` matches `/quiz`)
//! - No parameters or wildcards: every route path is a literal

/// Trait for matching a normalized path against a route condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one literal route path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    expected: String,
}

impl ExactPathMatcher {
    /// Create a new matcher for a literal path such as `/quiz`.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            expected: normalize(path.as_ref()),
        }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        normalize(path) == self.expected
    }
}

/// Strip query and fragment from a location, leaving only the path.
pub fn path_only(location: &str) -> &str {
    let end = location
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(location.len());
    &location[..end]
}

/// Canonical form used for comparisons: leading slash, no trailing slash
/// (except the root itself), lowercase.
pub fn normalize(path: &str) -> String {
    let path = path_only(path);
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let mut out = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        out.push('/');
    }
    out.push_str(&trimmed.to_lowercase());
    out
}
