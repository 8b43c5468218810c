//! Configuration loaded from environment variables.
//!
//! # Example
//!
//! ```rust,ignore
//! use rnib::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Namespace: {}", config.reader.namespace);
//! println!("Readers: {}", config.reader.pool_size());
//! ```

mod error;
mod logging;
mod parse;
mod reader;

pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use parse::parse_duration;
pub use reader::{ReaderConfig, DEFAULT_NAMESPACE};

/// Complete configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Reader configuration.
    pub reader: ReaderConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            reader: ReaderConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Namespace: {}", self.reader.namespace);
        info!("  Reader pool size: {}", self.reader.pool_size());

        match self.reader.acquire_timeout {
            Some(timeout) => info!("  Acquire timeout: {:?}", timeout),
            None => info!("  Acquire timeout: disabled"),
        }

        info!("  Log filter: {}", self.logging.filter);
    }
}
