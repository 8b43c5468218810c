//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use bytes::Bytes;

use super::{StorageError, StorageResult, SyncStorage};

#[derive(Debug, Default)]
struct Namespace {
    values: HashMap<String, Bytes>,
    /// Group members in insertion order, without duplicates.
    groups: HashMap<String, Vec<Bytes>>,
}

/// Thread-safe in-memory [`SyncStorage`].
///
/// Data is seeded with [`set`](Self::set) and [`add_member`](Self::add_member).
/// Once closed, every read fails.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    namespaces: RwLock<HashMap<String, Namespace>>,
    closed: AtomicBool,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&self, namespace: &str, key: impl Into<String>, value: impl Into<Bytes>) {
        self.namespaces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(namespace.to_string())
            .or_default()
            .values
            .insert(key.into(), value.into());
    }

    /// Remove `key`. Returns whether it existed.
    pub fn remove(&self, namespace: &str, key: &str) -> bool {
        self.namespaces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(namespace)
            .map(|ns| ns.values.remove(key).is_some())
            .unwrap_or(false)
    }

    /// Add `member` to `group`. Returns `false` if it was already a member.
    pub fn add_member(&self, namespace: &str, group: &str, member: impl Into<Bytes>) -> bool {
        let member = member.into();
        let mut namespaces = self
            .namespaces
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let members = namespaces
            .entry(namespace.to_string())
            .or_default()
            .groups
            .entry(group.to_string())
            .or_default();

        if members.contains(&member) {
            return false;
        }
        members.push(member);
        true
    }

    /// Check whether [`close`](SyncStorage::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> StorageResult<()> {
        if self.is_closed() {
            return Err(StorageError::from("storage is closed"));
        }
        Ok(())
    }
}

impl SyncStorage for MemoryStorage {
    fn get(&self, namespace: &str, keys: &[String]) -> StorageResult<HashMap<String, Bytes>> {
        self.ensure_open()?;
        let namespaces = self.namespaces.read().unwrap_or_else(PoisonError::into_inner);
        let Some(ns) = namespaces.get(namespace) else {
            return Ok(HashMap::new());
        };

        Ok(keys
            .iter()
            .filter_map(|key| ns.values.get(key).map(|value| (key.clone(), value.clone())))
            .collect())
    }

    fn get_members(&self, namespace: &str, group: &str) -> StorageResult<Vec<Bytes>> {
        self.ensure_open()?;
        let namespaces = self.namespaces.read().unwrap_or_else(PoisonError::into_inner);
        Ok(namespaces
            .get(namespace)
            .and_then(|ns| ns.groups.get(group))
            .cloned()
            .unwrap_or_default())
    }

    fn group_size(&self, namespace: &str, group: &str) -> StorageResult<i64> {
        let members = self.get_members(namespace, group)?;
        Ok(i64::try_from(members.len())?)
    }

    fn close(&self) -> StorageResult<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
