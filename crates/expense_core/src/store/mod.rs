//! State holders persisted through a [`KvRepository`](crate::repo::kv_repo::KvRepository).
//!
//! # Responsibility
//! - Own the expense/category collections and the theme preference.
//! - Write the full state after every mutation; read it back at start.
//!
//! # Invariants
//! - Pure state transitions (`ExpenseState`) never perform I/O.
//! - Stores are the single writer of their storage key.
//! - A missing or unreadable document yields the default state, never an error.

mod document;
pub mod expense_store;
pub mod state;
pub mod theme_store;

pub use document::{StoreError, StoreResult, STORE_VERSION};
