//! Redis Cluster command builders.
//!
//! This module provides builders for the Redis Cluster administration and
//! topology discovery commands, and [`ClusterAdmin`], which submits them
//! through an [`Executor`] and wraps each outcome in a [`Request`].

use tracing::debug;

use crate::cluster::topology::ClusterTopology;
use crate::core::command::{frame_to_status, frame_to_string, parse_frame_response, Cmd, Request};
use crate::core::executor::Executor;
use crate::proto::frame::Frame;
use crate::{Error, Result};

/// Creates a CLUSTER SLOTS command.
///
/// Returns information about which cluster slots are mapped to which Redis instances.
/// This is the primary method for discovering cluster topology.
pub fn cluster_slots() -> Cmd {
    Cmd::new("CLUSTER").arg("slots")
}

/// Creates a CLUSTER NODES command.
///
/// The reply is the raw node table, one node per line.
pub fn cluster_nodes() -> Cmd {
    Cmd::new("CLUSTER").arg("nodes")
}

/// Creates a CLUSTER MEET command, joining the node at `host:port` to the cluster.
pub fn cluster_meet(host: &str, port: &str) -> Cmd {
    Cmd::new("CLUSTER")
        .arg("meet")
        .arg(host.to_string())
        .arg(port.to_string())
}

/// Creates a CLUSTER REPLICATE command, making the receiving node a replica of `node_id`.
pub fn cluster_replicate(node_id: &str) -> Cmd {
    Cmd::new("CLUSTER").arg("replicate").arg(node_id.to_string())
}

/// Creates a CLUSTER ADDSLOTS command for the given slots, in the given order.
pub fn cluster_add_slots(slots: &[u16]) -> Cmd {
    slots
        .iter()
        .fold(Cmd::new("CLUSTER").arg("addslots"), |cmd, slot| {
            cmd.arg(slot.to_string())
        })
}

/// Creates a CLUSTER ADDSLOTS command for every slot in `min..=max`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `min > max`.
pub fn cluster_add_slots_range(min: u16, max: u16) -> Result<Cmd> {
    if min > max {
        return Err(Error::invalid_argument(format!(
            "slot range {}..={} is inverted",
            min, max
        )));
    }
    let slots: Vec<u16> = (min..=max).collect();
    Ok(cluster_add_slots(&slots))
}

/// Cluster administration over an [`Executor`].
///
/// Every call submits exactly one command and returns its [`Request`];
/// nothing is retried or cached.
///
/// # Example
///
/// ```no_run
/// # async fn example<E: muxis_topology::Executor>(executor: E) -> muxis_topology::Result<()> {
/// use muxis_topology::ClusterAdmin;
///
/// let admin = ClusterAdmin::new(executor);
/// let topology = admin.slots().await.result()?;
/// println!("{} slot ranges", topology.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClusterAdmin<E> {
    executor: E,
}

impl<E: Executor> ClusterAdmin<E> {
    /// Wraps an executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Returns the wrapped executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Runs CLUSTER SLOTS and parses the reply into a topology.
    pub async fn slots(&self) -> Request<ClusterTopology> {
        self.submit(cluster_slots(), |frame| {
            let frame = parse_frame_response(frame)?;
            ClusterTopology::from_cluster_slots(&frame)
        })
        .await
    }

    /// Runs CLUSTER NODES and returns the raw node table.
    pub async fn nodes(&self) -> Request<String> {
        self.submit(cluster_nodes(), frame_to_string).await
    }

    /// Runs CLUSTER MEET.
    pub async fn meet(&self, host: &str, port: &str) -> Request<String> {
        self.submit(cluster_meet(host, port), frame_to_status).await
    }

    /// Runs CLUSTER REPLICATE.
    pub async fn replicate(&self, node_id: &str) -> Request<String> {
        self.submit(cluster_replicate(node_id), frame_to_status).await
    }

    /// Runs CLUSTER ADDSLOTS.
    pub async fn add_slots(&self, slots: &[u16]) -> Request<String> {
        self.submit(cluster_add_slots(slots), frame_to_status).await
    }

    /// Runs CLUSTER ADDSLOTS for every slot in `min..=max`.
    ///
    /// An inverted range fails without contacting the server.
    pub async fn add_slots_range(&self, min: u16, max: u16) -> Request<String> {
        match cluster_add_slots_range(min, max) {
            Ok(cmd) => self.submit(cmd, frame_to_status).await,
            Err(err) => Request::new(Cmd::new("CLUSTER").arg("addslots"), Err(err)),
        }
    }

    async fn submit<T, F>(&self, cmd: Cmd, convert: F) -> Request<T>
    where
        F: FnOnce(Frame) -> Result<T>,
    {
        debug!(command = %cmd, "submitting cluster command");
        let result = match self.executor.execute(cmd.clone()).await {
            Ok(frame) => convert(frame),
            Err(err) => Err(err),
        };
        Request::new(cmd, result)
    }
}
