//! rnib - Read access to the RAN node topology stored in a shared data layer.
//!
//! This crate lets controllers query radio node, cell, load and E2 termination
//! records without knowing how they are keyed or encoded. Store handles are
//! shared between threads through a bounded object pool.
//!
//! # Features
//!
//! - **Typed reads**: Protobuf and JSON payloads decoded into domain records
//! - **Error taxonomy**: Every failure is `ResourceNotFound`, `Internal` or `Validation`
//! - **Bounded pooling**: At most N store handles, reused across callers
//! - **Async adapter**: Reader calls offloaded to tokio's blocking pool
//! - **Structured logging**: JSON log lines via `tracing`
//!
//! # Architecture
//!
//! - `RNibReader` - Builds keys, reads them through a `SyncStorage`, decodes payloads
//! - `ReaderPool` - `ObjectPool` of readers, each owning one store handle
//! - `AsyncReader` - Runs pooled reader calls from async code
//!
//! # Example
//!
//! ```rust,ignore
//! use rnib::config::Config;
//! use rnib::reader::ReaderPool;
//! use rnib::storage::MemoryStorage;
//!
//! let config = Config::from_env()?;
//! rnib::logging::init(&config.logging)?;
//!
//! let pool = ReaderPool::open(&config.reader, MemoryStorage::new);
//! let gnbs = pool.get()?.get_list_gnb_ids()?;
//! pool.shutdown();
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod entities;
pub mod error;
pub mod keys;
pub mod logging;
pub mod pool;
pub mod reader;
pub mod storage;

// Re-exports for convenience
pub use config::Config;
pub use error::{ErrorKind, RNibError, Result};
pub use pool::ObjectPool;
pub use reader::{AsyncReader, PooledReader, RNibReader, ReaderPool};
pub use storage::{MemoryStorage, SyncStorage};
