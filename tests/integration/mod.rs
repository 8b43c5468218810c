//! Integration tests for rnib
//!
//! These tests drive the object pool under real threads and the reader facade
//! end to end over the in-memory store. No external services are needed.
//!
//! Run with: cargo test --test integration

mod helpers;

mod pool;
mod reader;
