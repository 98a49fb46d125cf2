//! Route tree and lookup.
//!
//! # Responsibilities
//! - Own compiled routes and mounted sub-routers
//! - Look up the route matching a path and collect its parameters
//! - Reverse routing by route name
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Sub-routers are tried before routes, both in registration order
//! - First match wins
//! - Parameters accumulate from the outermost router to the route; on a name
//!   collision the innermost value wins
//! - A branch that fails to match contributes nothing to the result

use std::collections::HashSet;

use crate::config::schema::{RouteConfig, RouteTableConfig, RouterConfig};
use crate::observability::metrics;
use crate::routing::error::{PatternError, RouteError};
use crate::routing::params::{merge_parameters, Params};
use crate::routing::pattern::{build_uri, Anchoring, Matchable};

/// A single endpoint: a fully anchored pattern and what it dispatches to.
#[derive(Debug, Clone)]
pub struct Route {
    name: Option<String>,
    target: String,
    full_template: String,
    matchable: Matchable,
}

impl Route {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Handler or backend identifier this route dispatches to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Template including every parent router prefix.
    pub fn full_template(&self) -> &str {
        &self.full_template
    }

    pub fn matchable(&self) -> &Matchable {
        &self.matchable
    }

    /// Sets the name used for reverse routing.
    pub fn named(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Builds a path for this route, parent router parameters first.
    pub fn build_uri<S: AsRef<str>>(&self, values: &[S]) -> Result<String, RouteError> {
        build_uri(&self.full_template, values)
    }
}

/// Successful lookup.
#[derive(Debug, Clone)]
pub struct RouteMatch<'r> {
    pub route: &'r Route,
    /// Parameters from every router on the way down plus the route's own.
    pub params: Params,
}

/// A node of the route tree.
///
/// The root router has no prefix and accepts every path. Sub-routers carry a
/// start-anchored prefix; whatever follows the prefix is matched against
/// their children.
#[derive(Debug, Clone, Default)]
pub struct Router {
    prefix: Option<Matchable>,
    full_prefix: String,
    subrouters: Vec<Router>,
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty root router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a route tree from configuration.
    ///
    /// Any template that fails to compile aborts construction, as does a
    /// route name used twice.
    pub fn from_config(config: &RouteTableConfig) -> Result<Self, RouteError> {
        let mut router = Router::new();
        let mut names = HashSet::new();
        router.register(&config.routes, &config.routers, &mut names)?;

        tracing::info!(
            routes = router.route_count(),
            named = names.len(),
            "Route table compiled"
        );
        Ok(router)
    }

    fn register(
        &mut self,
        routes: &[RouteConfig],
        routers: &[RouterConfig],
        names: &mut HashSet<String>,
    ) -> Result<(), RouteError> {
        for config in routers {
            self.subrouter(&config.prefix)?
                .register(&config.routes, &config.routers, names)?;
        }
        for config in routes {
            let route = self.route(&config.template, &config.target)?;
            if let Some(name) = &config.name {
                if !names.insert(name.clone()) {
                    return Err(RouteError::DuplicateName(name.clone()));
                }
                route.named(name.as_str());
            }
        }
        Ok(())
    }

    /// Mount a sub-router under `prefix`.
    pub fn subrouter(&mut self, prefix: &str) -> Result<&mut Router, PatternError> {
        let matchable = Matchable::compile(prefix, Anchoring::Prefix)?;
        let index = self.subrouters.len();
        self.subrouters.push(Router {
            prefix: Some(matchable),
            full_prefix: format!("{}{}", self.full_prefix, prefix),
            subrouters: Vec::new(),
            routes: Vec::new(),
        });
        Ok(&mut self.subrouters[index])
    }

    /// Register a route. `template` is relative to this router's prefix.
    pub fn route(&mut self, template: &str, target: &str) -> Result<&mut Route, PatternError> {
        let matchable = Matchable::compile(template, Anchoring::Full)?;
        let index = self.routes.len();
        self.routes.push(Route {
            name: None,
            target: target.to_string(),
            full_template: format!("{}{}", self.full_prefix, template),
            matchable,
        });
        Ok(&mut self.routes[index])
    }

    pub fn prefix(&self) -> Option<&Matchable> {
        self.prefix.as_ref()
    }

    pub fn subrouters(&self) -> &[Router] {
        &self.subrouters
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes in this router and all of its sub-routers.
    pub fn route_count(&self) -> usize {
        self.routes.len() + self.subrouters.iter().map(Router::route_count).sum::<usize>()
    }

    /// Find the route matching `path`.
    pub fn find<'r>(&'r self, path: &str) -> Option<RouteMatch<'r>> {
        let found = self.find_in(path);
        match &found {
            Some(m) => {
                tracing::debug!(path, target = m.route.target(), params = ?m.params, "Route matched");
                metrics::record_match("hit");
            }
            None => {
                tracing::debug!(path, "No route matched");
                metrics::record_match("miss");
            }
        }
        found
    }

    fn find_in<'r>(&'r self, path: &str) -> Option<RouteMatch<'r>> {
        let (mut params, remainder) = match &self.prefix {
            Some(prefix) => {
                let hit = prefix.captures(path)?;
                (hit.params, hit.remainder)
            }
            None => (Params::new(), path),
        };

        let found = self
            .subrouters
            .iter()
            .find_map(|router| router.find_in(remainder))
            .or_else(|| {
                self.routes.iter().find_map(|route| {
                    route
                        .matchable
                        .captures(remainder)
                        .map(|hit| RouteMatch { route, params: hit.params })
                })
            })?;

        merge_parameters(&mut params, found.params);
        Some(RouteMatch {
            route: found.route,
            params,
        })
    }

    /// Look up a route by name anywhere in the tree.
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.name() == Some(name))
            .or_else(|| {
                self.subrouters
                    .iter()
                    .find_map(|router| router.route_by_name(name))
            })
    }

    /// Reverse routing: build the path of the route called `name`.
    pub fn url<S: AsRef<str>>(&self, name: &str, values: &[S]) -> Result<String, RouteError> {
        self.route_by_name(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?
            .build_uri(values)
    }
}
