//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / config produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → whatever metrics recorder the host installs
//! ```

pub mod logging;
pub mod metrics;
