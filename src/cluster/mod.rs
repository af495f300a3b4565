//! # Cluster
//!
//! Redis Cluster slot hashing, topology discovery, and administration commands.
//!
//! ## Features
//!
//! - **Slot hashing**: CRC16 key-to-slot mapping identical to the server's
//! - **Hash tags**: Supports Redis hash tags `{...}` for multi-key operations
//! - **Topology discovery**: Parses CLUSTER SLOTS into slot range → node address lists
//! - **Snapshots**: Swaps whole topologies atomically for concurrent readers
//! - **Administration**: ADDSLOTS, MEET, REPLICATE, NODES, SLOTS
//!
//! ## Example
//!
//! ```
//! use muxis_topology::{key_slot, ClusterTopology, Frame};
//!
//! let reply = Frame::Array(vec![
//!     Frame::Array(vec![
//!         Frame::Integer(0),
//!         Frame::Integer(8191),
//!         Frame::Array(vec![Frame::bulk("10.0.0.1"), Frame::Integer(7000)]),
//!     ]),
//!     Frame::Array(vec![
//!         Frame::Integer(8192),
//!         Frame::Integer(16383),
//!         Frame::Array(vec![Frame::bulk("10.0.0.2"), Frame::Integer(7000)]),
//!     ]),
//! ]);
//!
//! let topology = ClusterTopology::from_cluster_slots(&reply)?;
//! assert_eq!(topology.master_for_slot(key_slot("foo")), Some("10.0.0.2:7000"));
//! # Ok::<(), muxis_topology::Error>(())
//! ```

pub mod commands;
mod options;
mod slot;
mod state;
mod topology;

pub use commands::ClusterAdmin;
pub use options::{ClusterOptions, DEFAULT_DIAL_TIMEOUT, DEFAULT_POOL_SIZE};
pub use slot::{key_slot, key_slot_with, SLOT_COUNT};
pub use state::SharedTopology;
pub use topology::{ClusterSlot, ClusterTopology, SlotRange};
