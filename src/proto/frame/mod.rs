//! Generic reply tree.
//!
//! Replies arrive from the execution layer already decoded into nested
//! [`Frame`] values; nothing in this crate touches raw bytes on the wire.

/// Frame type definitions.
pub mod types;

pub use types::Frame;
