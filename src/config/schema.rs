//! Route table schema definitions.
//!
//! This module defines the on-disk structure of a route table. All types
//! derive Serde traits for deserialization from TOML.
//!
//! ```toml
//! [observability]
//! log_level = "debug"
//!
//! [[routes]]
//! name = "user.show"
//! template = "/user/{id:[0-9]+}"
//! target = "users"
//!
//! [[routers]]
//! prefix = "/api/{version:v[0-9]+}"
//!
//!   [[routers.routes]]
//!   template = "/status"
//!   target = "status"
//! ```

use serde::{Deserialize, Serialize};

/// Root of a route table file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteTableConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Routes mounted at the root.
    pub routes: Vec<RouteConfig>,

    /// Sub-routers mounted at the root.
    pub routers: Vec<RouterConfig>,
}

/// A single route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Unique name for reverse routing.
    #[serde(default)]
    pub name: Option<String>,

    /// URI template, relative to the enclosing router prefix.
    pub template: String,

    /// Handler or backend identifier the route dispatches to.
    pub target: String,
}

/// A sub-router mounted under a prefix template.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Prefix template, matched against the start of the remaining path.
    pub prefix: String,

    pub routes: Vec<RouteConfig>,

    pub routers: Vec<RouterConfig>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Pretty for development, JSON for log aggregation.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: RouteTableConfig = toml::from_str("").unwrap();
        assert!(config.routes.is_empty());
        assert!(config.routers.is_empty());
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_nested_tables() {
        let config: RouteTableConfig = toml::from_str(
            r#"
            [observability]
            log_format = "json"

            [[routes]]
            name = "user.show"
            template = "/user/{id:[0-9]+}"
            target = "users"

            [[routers]]
            prefix = "/api"

              [[routers.routers]]
              prefix = "/{version}"

                [[routers.routers.routes]]
                template = "/status"
                target = "status"
            "#,
        )
        .unwrap();

        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.routes[0].name.as_deref(), Some("user.show"));
        assert_eq!(config.routes[0].template, "/user/{id:[0-9]+}");
        assert_eq!(config.routers[0].prefix, "/api");
        assert_eq!(config.routers[0].routers[0].routes[0].target, "status");
    }
}
