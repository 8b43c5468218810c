//! Pooled reader variant.

use std::ops::Deref;

use crate::config::ReaderConfig;
use crate::error::{RNibError, Result};
use crate::pool::{ObjectPool, PoolError, PoolStats};
use crate::storage::SyncStorage;

use super::RNibReader;

/// Pool of readers, each owning its own store handle.
///
/// Readers are opened lazily, up to the configured pool size, and their store
/// handles are closed when the pool discards them.
#[derive(Debug)]
pub struct ReaderPool<S: SyncStorage> {
    pool: ObjectPool<RNibReader<S>>,
    acquire_timeout: Option<std::time::Duration>,
}

impl<S: SyncStorage + 'static> ReaderPool<S> {
    /// Create a pool whose readers open their store handle with `factory`.
    pub fn open<F>(config: &ReaderConfig, factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        let namespace = config.namespace.clone();
        let pool = ObjectPool::new(config.pool_size(), "rnib-reader")
            .with_constructor(move || RNibReader::new(factory(), namespace.clone()))
            .with_destructor(|reader: RNibReader<S>| {
                if let Err(e) = reader.close() {
                    tracing::warn!(namespace = %reader.namespace(), error = %e, "failed to close storage");
                }
            });

        Self {
            pool,
            acquire_timeout: config.acquire_timeout,
        }
    }

    /// Check out a reader. It goes back to the pool when the guard drops.
    ///
    /// Blocks while every reader is in use, up to the configured acquisition
    /// timeout. Fails with `Internal` if the pool is closed or the timeout
    /// elapses.
    pub fn get(&self) -> Result<PooledReader<'_, S>> {
        let reader = match self.acquire_timeout {
            Some(timeout) => self
                .pool
                .acquire_timeout(timeout)
                .map_err(RNibError::internal)?,
            None => self
                .pool
                .acquire()
                .ok_or_else(|| RNibError::internal(PoolError::Closed))?,
        };

        Ok(PooledReader {
            pool: &self.pool,
            reader: Some(reader),
        })
    }

    /// Close the pool and every idle reader.
    ///
    /// # Panics
    ///
    /// Panics if the pool has already been shut down.
    pub fn shutdown(&self) {
        self.pool.close();
    }

    /// Check whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Snapshot of idle and open readers.
    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Get the maximum number of open readers.
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }
}

/// A reader checked out of a [`ReaderPool`].
///
/// Returned to the pool on drop, or closed if the pool was shut down
/// meanwhile.
pub struct PooledReader<'a, S: SyncStorage> {
    pool: &'a ObjectPool<RNibReader<S>>,
    reader: Option<RNibReader<S>>,
}

impl<S: SyncStorage> Deref for PooledReader<'_, S> {
    type Target = RNibReader<S>;

    fn deref(&self) -> &Self::Target {
        self.reader
            .as_ref()
            .unwrap_or_else(|| unreachable!("reader is only taken on drop"))
    }
}

impl<S: SyncStorage> Drop for PooledReader<'_, S> {
    fn drop(&mut self) {
        if let Some(reader) = self.reader.take() {
            if let Err(reader) = self.pool.try_release(reader) {
                self.pool.discard(reader);
            }
        }
    }
}

impl<S: SyncStorage + std::fmt::Debug> std::fmt::Debug for PooledReader<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledReader")
            .field("reader", &self.reader)
            .finish()
    }
}
