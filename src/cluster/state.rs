//! Shared, swappable topology snapshots.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cluster::commands::ClusterAdmin;
use crate::cluster::topology::ClusterTopology;
use crate::core::executor::Executor;
use crate::Result;

/// Holds the current [`ClusterTopology`] for concurrent readers.
///
/// Readers take an `Arc` snapshot and keep it as long as they like; a refresh
/// swaps in a new snapshot and never touches one already handed out.
///
/// When to refresh is the caller's decision.
#[derive(Debug, Clone, Default)]
pub struct SharedTopology {
    current: Arc<RwLock<Arc<ClusterTopology>>>,
}

impl SharedTopology {
    /// Creates a holder with an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a holder seeded with `topology`.
    pub fn with_topology(topology: ClusterTopology) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(topology))),
        }
    }

    /// Returns the current snapshot.
    pub async fn snapshot(&self) -> Arc<ClusterTopology> {
        Arc::clone(&*self.current.read().await)
    }

    /// Replaces the current snapshot wholesale and returns the new one.
    pub async fn replace(&self, topology: ClusterTopology) -> Arc<ClusterTopology> {
        let next = Arc::new(topology);
        let mut current = self.current.write().await;
        *current = Arc::clone(&next);
        debug!(ranges = next.len(), "replaced cluster topology snapshot");
        next
    }

    /// Fetches CLUSTER SLOTS through `executor` and swaps in the result.
    ///
    /// # Errors
    ///
    /// Returns the execution or parse error; the previous snapshot stays current.
    pub async fn refresh<E: Executor>(&self, executor: E) -> Result<Arc<ClusterTopology>> {
        let admin = ClusterAdmin::new(executor);
        match admin.slots().await.result() {
            Ok(topology) => Ok(self.replace(topology).await),
            Err(err) => {
                warn!(error = %err, "topology refresh failed, keeping previous snapshot");
                Err(err)
            }
        }
    }
}
