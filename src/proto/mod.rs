//! Reply values and error types shared by every module.
//!
//! ## Modules
//!
//! - [`error`] - Error types for parsing and command execution
//! - [`frame`] - Frame types representing RESP data structures

/// Error types.
pub mod error;
pub mod frame;
