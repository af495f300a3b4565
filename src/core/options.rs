use std::time::Duration;

/// Effective per-connection settings handed to the connection layer.
///
/// Produced by [`ClusterOptions::resolve`](crate::ClusterOptions::resolve)
/// with all defaults applied; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionOptions {
    pub(crate) addresses: Vec<String>,
    pub(crate) password: Option<String>,
    pub(crate) database: u8,
    pub(crate) pool_size: usize,
    pub(crate) dial_timeout: Duration,
    pub(crate) read_timeout: Option<Duration>,
    pub(crate) write_timeout: Option<Duration>,
    pub(crate) idle_timeout: Option<Duration>,
}

impl ConnectionOptions {
    /// Seed addresses, normalized to `host:port`.
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    /// Password sent with `AUTH`, if any.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Logical database; cluster nodes only serve database 0.
    pub fn database(&self) -> u8 {
        self.database
    }

    /// Maximum number of connections across all cluster nodes.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Time allowed for establishing a connection.
    pub fn dial_timeout(&self) -> Duration {
        self.dial_timeout
    }

    /// Read timeout; `None` blocks indefinitely.
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// Write timeout; `None` blocks indefinitely.
    pub fn write_timeout(&self) -> Option<Duration> {
        self.write_timeout
    }

    /// Idle connection timeout; `None` keeps idle connections open.
    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout
    }
}
