//! Async adapter over the pooled reader.

use std::sync::Arc;

use crate::entities::{E2TInstance, NbIdentity, NodebInfo};
use crate::error::{RNibError, Result};
use crate::storage::SyncStorage;

use super::{RNibReader, ReaderPool};

/// Runs reader calls on tokio's blocking pool.
///
/// Waiting for a free reader and the store round-trip both block, so neither
/// happens on a runtime worker thread.
#[derive(Debug)]
pub struct AsyncReader<S: SyncStorage> {
    pool: Arc<ReaderPool<S>>,
}

impl<S: SyncStorage> Clone for AsyncReader<S> {
    fn clone(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
        }
    }
}

impl<S: SyncStorage + 'static> AsyncReader<S> {
    /// Create an adapter over `pool`.
    pub fn new(pool: Arc<ReaderPool<S>>) -> Self {
        Self { pool }
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &Arc<ReaderPool<S>> {
        &self.pool
    }

    /// Run `f` against a pooled reader.
    ///
    /// The reader is returned to the pool as soon as `f` completes. A panic
    /// inside `f` surfaces as `Internal`.
    pub async fn run<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&RNibReader<S>) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let reader = pool.get()?;
            f(&reader)
        })
        .await
        .map_err(RNibError::internal)?
    }

    /// Async [`RNibReader::get_nodeb`].
    pub async fn get_nodeb(&self, inventory_name: impl Into<String>) -> Result<NodebInfo> {
        let inventory_name = inventory_name.into();
        self.run(move |reader| reader.get_nodeb(&inventory_name))
            .await
    }

    /// Async [`RNibReader::get_list_nodeb_ids`].
    pub async fn get_list_nodeb_ids(&self) -> Result<Vec<NbIdentity>> {
        self.run(|reader| reader.get_list_nodeb_ids()).await
    }

    /// Async [`RNibReader::get_e2t_instances`].
    pub async fn get_e2t_instances(&self, addresses: Vec<String>) -> Result<Vec<E2TInstance>> {
        self.run(move |reader| reader.get_e2t_instances(&addresses))
            .await
    }
}
