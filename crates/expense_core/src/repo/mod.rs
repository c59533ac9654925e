//! Repository layer for durable local state.
//!
//! # Responsibility
//! - Define the key-value storage contract the stores persist through.
//! - Isolate SQLite query details from store orchestration.

pub mod kv_repo;
