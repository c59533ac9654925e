//! Search/category filtering and display ordering.

use crate::model::expense::Expense;
use std::cmp::Reverse;

/// List filter parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Case-insensitive description substring; empty matches everything.
    pub search: String,
    /// Exact category id; `None` matches everything.
    pub category: Option<String>,
}

impl ExpenseFilter {
    pub fn new(search: impl Into<String>, category: Option<String>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        matches_search(expense, &self.search.to_lowercase())
            && matches_category(expense, self.category.as_deref())
    }
}

/// Returns the expenses matching `filter`, in their original order.
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    let needle = filter.search.to_lowercase();
    let category = filter.category.as_deref();
    expenses
        .iter()
        .filter(|e| matches_search(e, &needle) && matches_category(e, category))
        .collect()
}

/// Orders by date, most recent first. Ties keep their relative order and
/// undated records go last.
pub fn sort_by_date_desc(expenses: &mut [&Expense]) {
    expenses.sort_by_key(|e| Reverse(e.date()));
}

/// Filtered and sorted list, as shown to the user.
pub fn visible_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    let mut visible = filter_expenses(expenses, filter);
    sort_by_date_desc(&mut visible);
    visible
}

fn matches_search(expense: &Expense, lowercase_needle: &str) -> bool {
    lowercase_needle.is_empty() || expense.description().to_lowercase().contains(lowercase_needle)
}

fn matches_category(expense: &Expense, category: Option<&str>) -> bool {
    category.map_or(true, |id| expense.category() == Some(id))
}
