//! # Core
//!
//! The seams between this crate and the surrounding client.
//!
//! ## Modules
//!
//! - [`command`] - Command builder, request objects, and reply conversions
//! - [`executor`] - The command execution capability
//! - [`options`] - Resolved per-connection options

pub use crate::proto::error::{Error, Result};

/// Command construction helpers.
pub mod command;
/// Command execution capability.
pub mod executor;
/// Per-connection options.
pub mod options;
