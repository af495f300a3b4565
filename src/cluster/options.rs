use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::core::options::ConnectionOptions;
use crate::{Error, Result};

/// Default maximum number of connections across all cluster nodes.
pub const DEFAULT_POOL_SIZE: usize = 60;

/// Default timeout for establishing a connection.
pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_PORT: u16 = 6379;

/// Client-facing cluster configuration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use muxis_topology::ClusterOptions;
///
/// let options = ClusterOptions::new()
///     .seeds("127.0.0.1:7000, redis://127.0.0.1:7001")
///     .password("secret")
///     .read_timeout(Some(Duration::from_secs(3)))
///     .resolve()
///     .unwrap();
///
/// assert_eq!(options.addresses(), ["127.0.0.1:7000", "127.0.0.1:7001"]);
/// assert_eq!(options.pool_size(), 60);
/// assert_eq!(options.dial_timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ClusterOptions {
    seeds: Vec<String>,
    password: Option<String>,
    pool_size: Option<usize>,
    dial_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
    idle_timeout: Option<Duration>,
}

impl ClusterOptions {
    /// Creates a new [`ClusterOptions`] instance with no seeds.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one seed node address.
    ///
    /// # Arguments
    ///
    /// * `address` - `host:port`, or a `redis://host:port` / `rediss://host:port` URL
    #[inline]
    pub fn seed(mut self, address: impl Into<String>) -> Self {
        self.seeds.push(address.into());
        self
    }

    /// Adds a comma-separated list of seed node addresses.
    ///
    /// Blank entries are skipped.
    pub fn seeds(mut self, addresses: &str) -> Self {
        self.seeds.extend(
            addresses
                .split(',')
                .map(str::trim)
                .filter(|addr| !addr.is_empty())
                .map(String::from),
        );
        self
    }

    /// Sets the password for authentication.
    #[inline]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the maximum number of connections across all cluster nodes.
    ///
    /// Zero selects the default of 60.
    #[inline]
    pub fn pool_size(mut self, size: usize) -> Self {
        self.pool_size = Some(size);
        self
    }

    /// Sets the connection timeout.
    ///
    /// Zero selects the default of 5 seconds.
    #[inline]
    pub fn dial_timeout(mut self, timeout: Duration) -> Self {
        self.dial_timeout = Some(timeout);
        self
    }

    /// Sets the read timeout for commands. `None` means no timeout.
    #[inline]
    pub fn read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Sets the write timeout for commands. `None` means no timeout.
    #[inline]
    pub fn write_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Sets how long an idle connection is kept. `None` means forever.
    #[inline]
    pub fn idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Applies defaults and produces the effective connection options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if no seed address was given or a
    /// seed address cannot be parsed.
    pub fn resolve(&self) -> Result<ConnectionOptions> {
        if self.seeds.is_empty() {
            return Err(Error::invalid_argument(
                "at least one seed address is required",
            ));
        }

        let addresses = self
            .seeds
            .iter()
            .map(|seed| normalize_address(seed))
            .collect::<Result<Vec<_>>>()?;

        let options = ConnectionOptions {
            addresses,
            password: self.password.clone(),
            database: 0,
            pool_size: match self.pool_size {
                Some(size) if size > 0 => size,
                _ => DEFAULT_POOL_SIZE,
            },
            dial_timeout: match self.dial_timeout {
                Some(timeout) if !timeout.is_zero() => timeout,
                _ => DEFAULT_DIAL_TIMEOUT,
            },
            read_timeout: self.read_timeout,
            write_timeout: self.write_timeout,
            idle_timeout: self.idle_timeout,
        };

        debug!(
            seeds = options.addresses.len(),
            pool_size = options.pool_size,
            "resolved cluster options"
        );

        Ok(options)
    }
}

/// Normalizes a seed address to `host:port`.
///
/// Accepts `host:port`, `[v6]:port`, and `redis://` / `rediss://` URLs;
/// a missing port defaults to 6379.
fn normalize_address(address: &str) -> Result<String> {
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::invalid_argument("seed address is empty"));
    }

    let candidate = if address.contains("://") {
        address.to_string()
    } else {
        format!("redis://{}", address)
    };
    let url = Url::parse(&candidate)
        .map_err(|e| Error::invalid_argument(format!("invalid seed address {:?}: {}", address, e)))?;

    let scheme = url.scheme();
    if scheme != "redis" && scheme != "rediss" {
        return Err(Error::invalid_argument(format!(
            "invalid scheme in {:?}, expected redis:// or rediss://",
            address
        )));
    }

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => {
            return Err(Error::invalid_argument(format!(
                "missing host in seed address {:?}",
                address
            )))
        }
    };

    let port = url.port().unwrap_or(DEFAULT_PORT);
    Ok(format!("{}:{}", host, port))
}
