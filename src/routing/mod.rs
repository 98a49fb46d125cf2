//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     URI template
//!     → braces.rs (top-level placeholder offsets)
//!     → pattern.rs (anchored regex + ordered parameter names)
//!     → router.rs (route tree, immutable once built)
//!
//! Incoming path:
//!     → router.rs (prefix match, hand remainder to children)
//!     → pattern.rs (evaluate, collect captures)
//!     → params.rs (zip captures with names)
//!     → Return: matched Route + parameters, or no match
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup; every compile error is fatal
//! - Matching never fails with an error, it either matches or it doesn't
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod braces;
pub mod error;
pub mod params;
pub mod pattern;
pub mod router;
pub mod shared;

pub use error::{PatternError, RouteError};
pub use params::Params;
pub use pattern::{Anchoring, Matchable, PathMatch};
pub use router::{Route, RouteMatch, Router};
pub use shared::SharedRouter;
