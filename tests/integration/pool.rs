//! Object pool under concurrent callers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use rnib::pool::{ObjectPool, PoolError};

use crate::helpers::Lifecycle;

fn counted_pool(capacity: usize, lifecycle: &Lifecycle) -> ObjectPool<usize> {
    let constructed = Arc::clone(&lifecycle.constructed);
    let destroyed = Arc::clone(&lifecycle.destroyed);
    ObjectPool::new(capacity, "integration")
        .with_constructor(move || constructed.fetch_add(1, Ordering::SeqCst))
        .with_destructor(move |_| {
            destroyed.fetch_add(1, Ordering::SeqCst);
        })
}

#[test]
fn test_concurrent_checkouts_never_exceed_capacity() {
    const CAPACITY: usize = 3;
    const THREADS: usize = 8;
    const ROUNDS: usize = 200;

    let lifecycle = Lifecycle::default();
    let pool = Arc::new(counted_pool(CAPACITY, &lifecycle));
    let in_use = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let in_use = Arc::clone(&in_use);
            let peak = Arc::clone(&peak);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    let item = pool.acquire().expect("pool is open");
                    let now = in_use.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    thread::yield_now();
                    in_use.fetch_sub(1, Ordering::SeqCst);
                    pool.release(item);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(peak.load(Ordering::SeqCst) <= CAPACITY);
    assert!(lifecycle.constructed() <= CAPACITY);
    assert_eq!(pool.stats().created, lifecycle.constructed());
    assert_eq!(pool.stats().available, lifecycle.constructed());
    assert_eq!(lifecycle.destroyed(), 0);

    pool.close();
    assert_eq!(lifecycle.destroyed(), lifecycle.constructed());
    assert_eq!(pool.stats().created, 0);
}

#[test]
fn test_close_wakes_every_blocked_acquirer() {
    let lifecycle = Lifecycle::default();
    let pool = Arc::new(counted_pool(1, &lifecycle));
    let held = pool.acquire().unwrap();

    let barrier = Arc::new(Barrier::new(4));
    let waiters: Vec<_> = (0..3)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                pool.acquire()
            })
        })
        .collect();

    barrier.wait();
    thread::sleep(Duration::from_millis(50));
    pool.close();

    for waiter in waiters {
        assert_eq!(waiter.join().unwrap(), None);
    }

    // The checked-out resource is the holder's to dispose of.
    assert!(pool.try_release(held).is_err());
    assert_eq!(lifecycle.destroyed(), 0);
}

#[test]
fn test_release_hands_resource_to_waiter() {
    let lifecycle = Lifecycle::default();
    let pool = Arc::new(counted_pool(1, &lifecycle));
    let held = pool.acquire().unwrap();

    let waiter = {
        let pool = Arc::clone(&pool);
        thread::spawn(move || pool.acquire_timeout(Duration::from_secs(5)))
    };

    thread::sleep(Duration::from_millis(20));
    pool.release(held);

    assert_eq!(waiter.join().unwrap(), Ok(held));
    assert_eq!(lifecycle.constructed(), 1);
}

#[test]
fn test_timeout_when_exhausted() {
    let lifecycle = Lifecycle::default();
    let pool = counted_pool(2, &lifecycle);
    let _first = pool.acquire().unwrap();
    let _second = pool.acquire().unwrap();

    let err = pool
        .acquire_timeout(Duration::from_millis(10))
        .unwrap_err();
    assert_eq!(err, PoolError::Timeout(Duration::from_millis(10)));
    assert_eq!(lifecycle.constructed(), 2);
}

#[test]
fn test_surplus_release_is_destroyed() {
    let lifecycle = Lifecycle::default();
    let pool = counted_pool(2, &lifecycle);
    let a = pool.acquire().unwrap();
    let b = pool.acquire().unwrap();
    pool.release(a);
    pool.release(b);

    // The idle buffer is full, so an extra resource goes to the destructor.
    pool.release(99);
    assert_eq!(lifecycle.destroyed(), 1);
    assert_eq!(pool.stats().available, 2);
}
