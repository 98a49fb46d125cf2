//! Route table configuration.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Router::from_config (compile every template)
//!     → Router (immutable, shared via Arc)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads and compiles the new table
//!     → SharedRouter swaps it in atomically
//! ```
//!
//! # Design Decisions
//! - A table is either fully compiled or rejected, never half applied
//! - All sections have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::ConfigError;
pub use schema::{LogFormat, ObservabilityConfig, RouteConfig, RouteTableConfig, RouterConfig};
