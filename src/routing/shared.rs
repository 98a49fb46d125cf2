//! Hot-swappable route table.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::router::Router;

/// The live route table.
///
/// Readers take a snapshot without locking; a reload replaces the whole
/// table atomically. Tables are always compiled before they are stored, so
/// readers never observe a partially built tree.
#[derive(Debug)]
pub struct SharedRouter {
    current: ArcSwap<Router>,
}

impl SharedRouter {
    pub fn new(router: Router) -> Self {
        Self {
            current: ArcSwap::new(Arc::new(router)),
        }
    }

    /// The table in effect right now.
    pub fn snapshot(&self) -> Arc<Router> {
        self.current.load_full()
    }

    /// Replace the table. In-flight lookups keep their old snapshot.
    pub fn replace(&self, router: Router) {
        let routes = router.route_count();
        self.current.store(Arc::new(router));
        tracing::info!(routes, "Route table swapped");
    }
}
