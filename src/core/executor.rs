use std::sync::Arc;

use futures::future::BoxFuture;

use crate::core::command::Cmd;
use crate::proto::frame::Frame;
use crate::Result;

/// Capability to submit a command and receive its decoded reply.
///
/// Connection handling, framing, pipelining and redirects all live behind
/// this trait. Implementations report server error replies either as
/// [`Frame::Error`] or as [`Error::Server`](crate::Error::Server); callers in
/// this crate accept both.
///
/// # Example
///
/// ```
/// use futures::future::BoxFuture;
/// use muxis_topology::{Cmd, Executor, Frame, Result};
///
/// struct AlwaysOk;
///
/// impl Executor for AlwaysOk {
///     fn execute(&self, _cmd: Cmd) -> BoxFuture<'_, Result<Frame>> {
///         Box::pin(async { Ok(Frame::SimpleString(b"OK".to_vec())) })
///     }
/// }
/// ```
pub trait Executor: Send + Sync {
    /// Sends `cmd` and resolves to the reply tree.
    fn execute(&self, cmd: Cmd) -> BoxFuture<'_, Result<Frame>>;
}

impl<E: Executor + ?Sized> Executor for &E {
    fn execute(&self, cmd: Cmd) -> BoxFuture<'_, Result<Frame>> {
        (**self).execute(cmd)
    }
}

impl<E: Executor + ?Sized> Executor for Arc<E> {
    fn execute(&self, cmd: Cmd) -> BoxFuture<'_, Result<Frame>> {
        (**self).execute(cmd)
    }
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn execute(&self, cmd: Cmd) -> BoxFuture<'_, Result<Frame>> {
        (**self).execute(cmd)
    }
}
