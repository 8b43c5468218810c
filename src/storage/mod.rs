//! Shared data layer access.
//!
//! The reader only needs a narrow, synchronous slice of the data layer:
//! multi-key reads and group membership queries. Values and group members
//! are opaque byte payloads; interpreting them is left to the caller.

mod memory;

pub use memory::MemoryStorage;

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

/// Error raised by a storage backend.
pub type StorageError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous key-value store with named groups.
///
/// Implementations must be safe to share between threads.
pub trait SyncStorage: Send + Sync {
    /// Read `keys` from `namespace`.
    ///
    /// Keys that do not exist are absent from the returned map.
    fn get(&self, namespace: &str, keys: &[String]) -> StorageResult<HashMap<String, Bytes>>;

    /// List every member of `group`. Missing groups have no members.
    fn get_members(&self, namespace: &str, group: &str) -> StorageResult<Vec<Bytes>>;

    /// Count the members of `group`.
    fn group_size(&self, namespace: &str, group: &str) -> StorageResult<i64>;

    /// Release the backend connection.
    fn close(&self) -> StorageResult<()>;
}

impl<S: SyncStorage + ?Sized> SyncStorage for Arc<S> {
    fn get(&self, namespace: &str, keys: &[String]) -> StorageResult<HashMap<String, Bytes>> {
        (**self).get(namespace, keys)
    }

    fn get_members(&self, namespace: &str, group: &str) -> StorageResult<Vec<Bytes>> {
        (**self).get_members(namespace, group)
    }

    fn group_size(&self, namespace: &str, group: &str) -> StorageResult<i64> {
        (**self).group_size(namespace, group)
    }

    fn close(&self) -> StorageResult<()> {
        (**self).close()
    }
}
