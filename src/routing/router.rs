//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Declare the application's routes (`/` → join, `/quiz` → quiz)
//! - Strip the history base path from incoming locations
//! - Look up the matching route, or return an explicit no-match
//! - Build clean URLs for views
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - O(n) scan over routes (two entries)
//! - Explicit NotFound rather than silent default

use serde::Serialize;
use std::fmt;

use crate::routing::matcher::{path_only, ExactPathMatcher, Matcher};

/// The views the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Entry screen where a participant enters their id and quiz id.
    Join,
    /// Question screen for a joined participant.
    Quiz,
}

impl View {
    /// Route name of the view.
    pub fn name(self) -> &'static str {
        match self {
            View::Join => "join",
            View::Quiz => "quiz",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A declared route.
#[derive(Debug, Clone)]
pub struct Route {
    /// Route name, used for logging and named lookups.
    pub name: &'static str,
    /// Literal path relative to the base.
    pub path: &'static str,
    /// View rendered for this route.
    pub view: View,
    matcher: ExactPathMatcher,
}

impl Route {
    fn new(name: &'static str, path: &'static str, view: View) -> Self {
        Self {
            name,
            path,
            view,
            matcher: ExactPathMatcher::new(path),
        }
    }
}

/// Outcome of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a Route),
    NotFound { path: String },
}

impl Resolution<'_> {
    /// The resolved view, if any.
    pub fn view(&self) -> Option<View> {
        match self {
            Resolution::Matched(route) => Some(route.view),
            Resolution::NotFound { .. } => None,
        }
    }

    /// Name used when rendering: the route name or `not-found`.
    pub fn view_name(&self) -> &'static str {
        match self {
            Resolution::Matched(route) => route.name,
            Resolution::NotFound { .. } => "not-found",
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.path == other.path && self.view == other.view
    }
}

impl Eq for Route {}

/// The application's route table in history mode.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Base path without trailing slash; empty for the root.
    base: String,
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the route table mounted under `base_url` (e.g. `/` or `/app/`).
    pub fn new(base_url: &str) -> Self {
        Self {
            base: normalize_base(base_url),
            routes: vec![
                Route::new("join", "/", View::Join),
                Route::new("quiz", "/quiz", View::Quiz),
            ],
        }
    }

    /// Base URL as configured for history mode, always ending in `/`.
    pub fn base_url(&self) -> String {
        format!("{}/", self.base)
    }

    /// All declared routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a location (absolute path, optionally with query and fragment).
    pub fn resolve(&self, location: &str) -> Resolution<'_> {
        let Some(relative) = self.strip_base(location) else {
            return Resolution::NotFound {
                path: path_only(location).to_string(),
            };
        };

        match self.routes.iter().find(|r| r.matcher.matches(relative)) {
            Some(route) => Resolution::Matched(route),
            None => Resolution::NotFound {
                path: path_only(location).to_string(),
            },
        }
    }

    /// Look up a route by name.
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Look up the route that renders a view.
    pub fn route_for(&self, view: View) -> &Route {
        // Every View variant has a route declared in `new`.
        self.routes
            .iter()
            .find(|r| r.view == view)
            .unwrap_or(&self.routes[0])
    }

    /// Clean URL for a view, including the base path.
    pub fn href(&self, view: View) -> String {
        format!("{}{}", self.base, self.route_for(view).path)
    }

    fn strip_base<'l>(&self, location: &'l str) -> Option<&'l str> {
        let path = path_only(location);
        if self.base.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

/// Canonical base path: leading slash, no trailing slash, empty for the root.
/// `app`, `/app` and `/app/` all become `/app`.
pub fn normalize_base(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() || base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{}", base)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new("/")
    }
}
