//! Route table validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty targets, and empty templates at the root
//!   (an empty nested template sits exactly at the router's mount point)
//! - Detect route names used more than once
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteTableConfig → Result<(), Vec<ValidationError>>
//! - Template syntax is left to the pattern compiler

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{RouteConfig, RouteTableConfig, RouterConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{location}: root route template is empty")]
    EmptyTemplate { location: String },

    #[error("{location}: route target is empty")]
    EmptyTarget { location: String },

    #[error("{location}: route name is empty")]
    EmptyName { location: String },

    #[error("{location}: route name {name:?} is already used")]
    DuplicateName { location: String, name: String },

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

/// Check a route table, collecting every problem found.
pub fn validate_config(config: &RouteTableConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    validate_level(&config.routes, &config.routers, "", &mut names, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_level(
    routes: &[RouteConfig],
    routers: &[RouterConfig],
    path: &str,
    names: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for (i, route) in routes.iter().enumerate() {
        let location = format!("{path}routes[{i}]");
        // Nested, an empty template matches the router prefix itself.
        if path.is_empty() && route.template.is_empty() {
            errors.push(ValidationError::EmptyTemplate {
                location: location.clone(),
            });
        }
        if route.target.trim().is_empty() {
            errors.push(ValidationError::EmptyTarget {
                location: location.clone(),
            });
        }
        match route.name.as_deref() {
            Some("") => errors.push(ValidationError::EmptyName { location }),
            Some(name) if !names.insert(name.to_string()) => {
                errors.push(ValidationError::DuplicateName {
                    location,
                    name: name.to_string(),
                });
            }
            _ => {}
        }
    }

    // An empty prefix is fine: the router then groups routes without
    // consuming any of the path.
    for (i, router) in routers.iter().enumerate() {
        let nested = format!("{path}routers[{i}].");
        validate_level(&router.routes, &router.routers, &nested, names, errors);
    }
}
