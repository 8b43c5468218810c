//! Reader configuration.

use std::num::NonZeroUsize;
use std::time::Duration;

use super::parse::{env_duration, env_or, env_parse};
use super::ConfigError;

/// Default store namespace of the node topology data.
pub const DEFAULT_NAMESPACE: &str = "e2Manager";

/// Reader configuration loaded from environment.
///
/// The pool size is resolved at construction time and never zero.
#[derive(Clone, Debug)]
pub struct ReaderConfig {
    /// Store namespace used by every reader call.
    pub namespace: String,
    /// Resolved reader pool capacity.
    pool_size: NonZeroUsize,
    /// Bound on pooled reader acquisition. `None` waits indefinitely.
    pub acquire_timeout: Option<Duration>,
}

impl ReaderConfig {
    /// Create a configuration without an acquisition timeout.
    pub fn new(namespace: impl Into<String>, pool_size: NonZeroUsize) -> Self {
        Self {
            namespace: namespace.into(),
            pool_size,
            acquire_timeout: None,
        }
    }

    /// Set the acquisition timeout.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let namespace = env_or("RNIB_NAMESPACE", DEFAULT_NAMESPACE);
        if namespace.is_empty() {
            return Err(ConfigError::Invalid {
                key: "RNIB_NAMESPACE".into(),
                message: "namespace cannot be empty".into(),
            });
        }

        Ok(Self {
            namespace,
            pool_size: Self::parse_pool_size()?,
            acquire_timeout: env_duration("RNIB_ACQUIRE_TIMEOUT", "off")?,
        })
    }

    /// Get the reader pool capacity.
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.pool_size.get()
    }

    fn parse_pool_size() -> Result<NonZeroUsize, ConfigError> {
        let size: usize = env_parse("RNIB_POOL_SIZE", 0)?;

        // Resolve 0 to CPU count
        let count = if size == 0 { num_cpus::get() } else { size };

        NonZeroUsize::new(count).ok_or_else(|| ConfigError::Invalid {
            key: "RNIB_POOL_SIZE".into(),
            message: "pool size cannot be zero".into(),
        })
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        let pool_size = NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN);
        Self::new(DEFAULT_NAMESPACE, pool_size)
    }
}
