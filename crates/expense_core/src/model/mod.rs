//! Domain model for expenses, categories and the persisted UI theme.
//!
//! # Responsibility
//! - Define the records the store owns and the views consume.
//! - Keep JSON shapes stable for persistence and export.
//!
//! # Invariants
//! - Expense ids and category ids are caller-assigned strings.
//! - Expense records are kept verbatim; see [`expense::Expense`].

pub mod category;
pub mod expense;
pub mod theme;
