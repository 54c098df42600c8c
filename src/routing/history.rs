//! Browser-style navigation history.
//!
//! # Responsibilities
//! - Keep the stack of visited locations and the current position
//! - Prefix app-relative paths with the base path (clean URLs, no `#`)
//! - Resolve the current location through the route table
//!
//! # Design Decisions
//! - Push truncates the forward stack, like the browser history API
//! - Back/forward at either end are no-ops that report `false`

use crate::routing::router::{normalize_base, Resolution, RouteTable};

/// Navigation history for one application instance.
#[derive(Debug, Clone)]
pub struct History {
    base: String,
    entries: Vec<String>,
    index: usize,
}

impl History {
    /// Create a history positioned at the base URL.
    pub fn new(base_url: &str) -> Self {
        let base = normalize_base(base_url);
        let start = format!("{}/", base);
        Self {
            base,
            entries: vec![start],
            index: 0,
        }
    }

    /// Full current location, including base, query and fragment.
    pub fn location(&self) -> &str {
        &self.entries[self.index]
    }

    /// Navigate to an app-relative location, adding a history entry.
    pub fn push(&mut self, to: &str) {
        let location = self.full(to);
        tracing::debug!(from = %self.location(), to = %location, "Navigation push");
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
    }

    /// Navigate to an app-relative location, replacing the current entry.
    pub fn replace(&mut self, to: &str) {
        let location = self.full(to);
        tracing::debug!(from = %self.location(), to = %location, "Navigation replace");
        self.entries[self.index] = location;
    }

    /// Go one entry back. Returns false if already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Go one entry forward. Returns false if already at the last entry.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Number of entries in the stack. Never zero: the start entry stays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Resolve the current location against a route table.
    pub fn current<'t>(&self, routes: &'t RouteTable) -> Resolution<'t> {
        routes.resolve(self.location())
    }

    fn full(&self, to: &str) -> String {
        if to.starts_with('/') {
            format!("{}{}", self.base, to)
        } else {
            format!("{}/{}", self.base, to)
        }
    }
}
