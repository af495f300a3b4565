//! # Muxis Topology
//!
//! Client-side Redis Cluster topology resolution and key routing:
//! which slot a key hashes to, and which nodes currently serve that slot.
//!
//! Transport is not included. Commands go out through an [`Executor`]
//! supplied by the caller, and replies come back as [`Frame`] trees.
//!
//! ## Features
//!
//! - `serde` - Serialize/Deserialize for topology types
//!
//! ## Example
//!
//! ```
//! use muxis_topology::{key_slot, SLOT_COUNT};
//!
//! let slot = key_slot("user:{42}:profile");
//! assert_eq!(slot, key_slot("user:{42}:orders"));
//! assert!(slot < SLOT_COUNT);
//! ```

#![warn(missing_docs)]

pub(crate) mod core;
pub(crate) mod proto;

pub mod cluster;

pub use crate::cluster::{
    key_slot, key_slot_with, ClusterAdmin, ClusterOptions, ClusterSlot, ClusterTopology,
    SharedTopology, SlotRange, SLOT_COUNT,
};
pub use crate::core::command::{Cmd, Request};
pub use crate::core::executor::Executor;
pub use crate::core::options::ConnectionOptions;
pub use crate::core::{Error, Result};
pub use crate::proto::frame::Frame;
