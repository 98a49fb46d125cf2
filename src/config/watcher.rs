//! Route table file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_router;
use crate::observability::metrics;
use crate::routing::Router;

/// Hand a compiled table to the consumer.
///
/// Returns false once the receiving side is gone; reloads are then dropped.
fn deliver(tx: &mpsc::UnboundedSender<Router>, router: Router) -> bool {
    match tx.send(router) {
        Ok(()) => true,
        Err(_) => {
            tracing::debug!("Route table receiver closed, dropping reloaded table");
            false
        }
    }
}

/// A watcher that recompiles the route table whenever its file changes.
pub struct RouteTableWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<Router>,
}

impl RouteTableWatcher {
    /// Create a new RouteTableWatcher.
    ///
    /// Returns the watcher and a receiver for freshly compiled route tables.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<Router>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// Only tables that load, validate and compile are sent; anything else
    /// is logged and the current table stays in effect. The returned watcher
    /// must be kept alive for as long as updates are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Route table change detected, reloading...");
                        match load_router(&path) {
                            Ok(router) => {
                                metrics::record_reload("applied");
                                deliver(&tx, router);
                            }
                            Err(e) => {
                                metrics::record_reload("rejected");
                                tracing::error!(
                                    "Failed to reload route table: {}. Keeping current table.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Route table watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_to_open_receiver() {
        let (watcher, mut rx) = RouteTableWatcher::new(Path::new("routes.toml"));
        assert!(deliver(&watcher.update_tx, Router::new()));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_deliver_after_receiver_dropped() {
        let (watcher, rx) = RouteTableWatcher::new(Path::new("routes.toml"));
        drop(rx);
        assert!(!deliver(&watcher.update_tx, Router::new()));
    }
}
