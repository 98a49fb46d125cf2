//! URI template compilation and route matching.
//!
//! Templates like `/user/{id:[0-9]+}` are compiled once, at route table
//! construction, into anchored patterns with one capture per placeholder.
//! Lookups bind the placeholder names to the matched path segments.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::RouteTableConfig;
pub use routing::{Anchoring, Matchable, Params, PatternError, RouteError, Router};
