//! Channel-backed object pool implementation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};

use super::error::{PoolError, PoolResult};
use super::PoolStats;

/// Factory invoked when the pool needs a new resource.
pub type Constructor<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Finalizer invoked on resources the pool discards.
pub type Destructor<T> = Box<dyn Fn(T) + Send + Sync>;

/// A bounded, thread-safe pool of reusable resources.
///
/// At most `capacity` resources are constructed. Idle resources wait in a
/// bounded channel; acquirers take from it without locking and only block
/// when every resource is checked out.
pub struct ObjectPool<T> {
    /// Sending half of the idle buffer. `None` once the pool is closed.
    sender: RwLock<Option<Sender<T>>>,
    /// Receiving half of the idle buffer.
    receiver: Receiver<T>,
    /// Maximum number of live resources.
    capacity: usize,
    /// Resources constructed minus resources destroyed on close.
    created: AtomicUsize,
    constructor: Option<Constructor<T>>,
    destructor: Option<Destructor<T>>,
    /// Pool name for logging.
    name: String,
}

impl<T: Send> ObjectPool<T> {
    /// Create an open pool with no callbacks.
    ///
    /// Without a constructor the pool only hands out resources that were
    /// released into it.
    pub fn new(capacity: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        let (sender, receiver) = crossbeam_channel::bounded(capacity);

        tracing::info!(pool = %name, capacity, "object pool created");

        Self {
            sender: RwLock::new(Some(sender)),
            receiver,
            capacity,
            created: AtomicUsize::new(0),
            constructor: None,
            destructor: None,
            name,
        }
    }

    /// Set the factory used to construct new resources.
    pub fn with_constructor<F>(mut self, constructor: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.constructor = Some(Box::new(constructor));
        self
    }

    /// Set the finalizer run on discarded resources.
    pub fn with_destructor<F>(mut self, destructor: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.destructor = Some(Box::new(destructor));
        self
    }

    /// Take a resource, blocking while the pool is exhausted.
    ///
    /// Returns an idle resource if one is waiting, otherwise constructs one
    /// when below capacity, otherwise blocks until another caller releases.
    /// Returns `None` if the pool is closed, including when it is closed while
    /// this call is waiting.
    pub fn acquire(&self) -> Option<T> {
        match self.receiver.try_recv() {
            Ok(item) => return Some(item),
            Err(TryRecvError::Disconnected) => return None,
            Err(TryRecvError::Empty) => {}
        }

        if let Some(item) = self.try_construct() {
            return Some(item);
        }

        self.receiver.recv().ok()
    }

    /// Like [`acquire`](Self::acquire), but gives up after `timeout`.
    pub fn acquire_timeout(&self, timeout: Duration) -> PoolResult<T> {
        match self.receiver.try_recv() {
            Ok(item) => return Ok(item),
            Err(TryRecvError::Disconnected) => return Err(PoolError::Closed),
            Err(TryRecvError::Empty) => {}
        }

        if let Some(item) = self.try_construct() {
            return Ok(item);
        }

        self.receiver.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => PoolError::Timeout(timeout),
            RecvTimeoutError::Disconnected => PoolError::Closed,
        })
    }

    /// Construct a new resource if a constructor is set, the pool is open and
    /// the capacity allows it.
    fn try_construct(&self) -> Option<T> {
        let constructor = self.constructor.as_ref()?;

        // Held across construction so close() cannot reconcile `created` meanwhile.
        let guard = self.sender.read().unwrap_or_else(PoisonError::into_inner);
        if guard.is_none() {
            return None;
        }

        self.created
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |created| {
                (created < self.capacity).then_some(created + 1)
            })
            .ok()?;
        let slot = SlotReservation {
            created: &self.created,
        };

        tracing::debug!(pool = %self.name, "constructing pooled resource");
        let item = constructor();
        std::mem::forget(slot);
        Some(item)
    }

    /// Return a resource to the pool.
    ///
    /// Never blocks: if the idle buffer is full the resource is handed to the
    /// destructor instead.
    ///
    /// # Panics
    ///
    /// Panics if the pool has been closed.
    pub fn release(&self, item: T) {
        if self.try_release(item).is_err() {
            panic!("release called on closed pool '{}'", self.name);
        }
    }

    /// Return a resource to the pool, handing it back if the pool is closed.
    pub fn try_release(&self, item: T) -> Result<(), T> {
        let guard = self.sender.read().unwrap_or_else(PoisonError::into_inner);
        let Some(sender) = guard.as_ref() else {
            return Err(item);
        };

        if let Err(e) = sender.try_send(item) {
            tracing::debug!(pool = %self.name, "idle buffer full, discarding resource");
            self.discard(e.into_inner());
        }
        Ok(())
    }

    /// Run the destructor, if any, on a resource without returning it.
    pub fn discard(&self, item: T) {
        if let Some(destructor) = &self.destructor {
            destructor(item);
        }
    }

    /// Close the pool and destroy every idle resource.
    ///
    /// Resources checked out at this point are no longer tracked; they remain
    /// the holder's responsibility. Blocked acquirers wake up empty-handed.
    ///
    /// # Panics
    ///
    /// Panics if the pool has already been closed.
    pub fn close(&self) {
        let sender = self
            .sender
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if sender.is_none() {
            panic!("close called on closed pool '{}'", self.name);
        }
        drop(sender);

        let destroyed = self.drain();
        tracing::info!(pool = %self.name, destroyed, "object pool closed");
    }

    /// Destroy buffered resources and reconcile the created counter.
    fn drain(&self) -> usize {
        let mut destroyed = 0;
        for item in self.receiver.try_iter() {
            self.discard(item);
            destroyed += 1;
        }
        self.created.fetch_sub(destroyed, Ordering::SeqCst);
        destroyed
    }

    /// Snapshot of idle and live resource counts.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            available: self.receiver.len(),
            created: self.created.load(Ordering::SeqCst),
        }
    }

    /// Check whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.sender
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Get the maximum number of live resources.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the pool name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A slot counted in `created` whose resource is still being constructed.
///
/// Dropped only if the constructor unwinds, giving the slot back.
struct SlotReservation<'a> {
    created: &'a AtomicUsize,
}

impl Drop for SlotReservation<'_> {
    fn drop(&mut self) {
        self.created.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<T> Drop for ObjectPool<T> {
    fn drop(&mut self) {
        let sender = self.sender.get_mut().unwrap_or_else(PoisonError::into_inner);
        if sender.take().is_none() {
            return;
        }

        for item in self.receiver.try_iter() {
            if let Some(destructor) = &self.destructor {
                destructor(item);
            }
        }
    }
}

impl<T> std::fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectPool")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("available", &self.receiver.len())
            .field("created", &self.created.load(Ordering::SeqCst))
            .finish()
    }
}
