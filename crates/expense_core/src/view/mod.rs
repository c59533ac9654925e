//! Derived views over a store snapshot.
//!
//! # Responsibility
//! - Compute filtered lists, category totals, time series and summaries.
//!
//! # Invariants
//! - Every function here is pure: no I/O, no clock reads, no mutation.
//!   Callers pass "today" explicitly.
//! - Aggregates sum unrounded amounts; rounding happens only in
//!   [`format_amount`].

pub mod breakdown;
pub mod filter;
pub mod series;
pub mod summary;

use crate::model::category::{Category, UNCATEGORIZED_COLOR, UNCATEGORIZED_NAME};

/// Formats an amount with exactly two fraction digits.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Resolves a category id to its display name.
pub fn category_name<'a>(categories: &'a [Category], id: Option<&str>) -> &'a str {
    find(categories, id).map_or(UNCATEGORIZED_NAME, |c| c.name.as_str())
}

/// Resolves a category id to its display color.
pub fn category_color<'a>(categories: &'a [Category], id: Option<&str>) -> &'a str {
    find(categories, id).map_or(UNCATEGORIZED_COLOR, |c| c.color.as_str())
}

fn find<'a>(categories: &'a [Category], id: Option<&str>) -> Option<&'a Category> {
    let id = id?;
    categories.iter().find(|c| c.id == id)
}
