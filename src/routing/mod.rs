//! Client-side routing subsystem.
//!
//! # Data Flow
//! ```text
//! Location (base + path + ?query + #fragment)
//!     → history.rs (navigation stack, current location)
//!     → router.rs (strip base, look up route)
//!     → matcher.rs (normalized exact path comparison)
//!     → Return: Matched(route) or NotFound
//! ```
//!
//! # Design Decisions
//! - Route table is static and immutable once built
//! - Views are an enum, never stringly-typed at call sites
//! - Unmatched paths resolve to an explicit NotFound, never a silent default
//! - History mode: clean URLs under a base path, no fragment routing

pub mod history;
pub mod matcher;
pub mod router;

pub use history::History;
pub use router::{Resolution, Route, RouteTable, View};
