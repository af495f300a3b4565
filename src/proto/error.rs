use std::io;

use thiserror::Error;

use crate::proto::frame::Frame;

/// Result type alias for muxis-topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while resolving cluster topology or running cluster commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An IO error reported by the execution layer.
    #[error("IO error: {source}")]
    Io {
        /// The underlying IO error.
        #[from]
        source: io::Error,
    },

    /// A reply had the wrong overall type for the request that produced it.
    #[error("protocol error: {message}")]
    Protocol {
        /// Description of the error.
        message: String,
    },

    /// A reply did not have the shape the parser requires.
    ///
    /// Carries the offending value as it was received so callers can log it.
    #[error("malformed reply: expected {expected}, got {got}")]
    MalformedReply {
        /// Description of the expected shape.
        expected: String,
        /// The raw value that failed validation.
        got: Frame,
    },

    /// The server returned an error.
    #[error("server error: {message}")]
    Server {
        /// Error message from server.
        message: String,
    },

    /// Invalid argument provided.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of invalid argument.
        message: String,
    },
}

impl Error {
    pub(crate) fn malformed(expected: impl Into<String>, got: &Frame) -> Self {
        Error::MalformedReply {
            expected: expected.into(),
            got: got.clone(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}
