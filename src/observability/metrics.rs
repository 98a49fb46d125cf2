//! Metrics collection.
//!
//! # Metrics
//! - `routebind_patterns_compiled_total` (counter): templates compiled
//! - `routebind_pattern_errors_total` (counter): compile failures by kind
//! - `routebind_matches_total` (counter): lookups by outcome (hit, miss)
//! - `routebind_reloads_total` (counter): table reloads by outcome
//!
//! # Design Decisions
//! - Goes through the `metrics` facade; without an installed recorder the
//!   calls are no-ops
//! - Labels are static strings only

use metrics::counter;

pub fn record_pattern_compiled() {
    counter!("routebind_patterns_compiled_total").increment(1);
}

pub fn record_pattern_error(kind: &'static str) {
    counter!("routebind_pattern_errors_total", "kind" => kind).increment(1);
}

pub fn record_match(outcome: &'static str) {
    counter!("routebind_matches_total", "outcome" => outcome).increment(1);
}

pub fn record_reload(outcome: &'static str) {
    counter!("routebind_reloads_total", "outcome" => outcome).increment(1);
}
