//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load table → Validate → Compile → Start watcher → Serve lookups
//!
//! Shutdown (signals.rs):
//!     SIGTERM/SIGINT → stop the watch loop → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: a table that does not compile aborts startup
//! - Reload failures are logged, never fatal

pub mod signals;

pub use signals::shutdown_signal;
