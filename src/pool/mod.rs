//! Bounded object pool.
//!
//! Manages expensive, reusable resources (store handles) shared by many
//! caller threads.
//!
//! # Architecture
//!
//! ```text
//!   acquire()                                   release(item)
//!      │                                              │
//!      ├─ try_recv ◀──┐                  try_send ────┤
//!      │              │                     │         │
//!      │       ┌──────┴──────────┐          │         ▼
//!      │       │ bounded channel │◀─────────┘   full? destroy
//!      │       │  (idle items)   │
//!      │       └─────────────────┘
//!      ├─ created < capacity? construct (CAS on `created`)
//!      └─ else recv (blocks until a release or close)
//! ```
//!
//! The pool is `Open` until [`ObjectPool::close`], after which it is `Closed`
//! for good. Releasing into or closing a closed pool is a programming error
//! and panics.

mod error;
mod object;

pub use error::{PoolError, PoolResult};
pub use object::{Constructor, Destructor, ObjectPool};

/// Advisory snapshot of pool occupancy.
///
/// Not transactionally consistent with concurrent acquire/release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Idle resources waiting in the pool.
    pub available: usize,
    /// Live resources: constructed and not yet destroyed by `close`.
    pub created: usize,
}
