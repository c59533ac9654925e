//! Headline statistics: lifetime total, this month, average, largest.

use crate::model::expense::Expense;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: f64,
    /// Sum of expenses dated inside the calendar month of `today`.
    pub this_month: f64,
    /// Arithmetic mean; `0.0` without expenses.
    pub average: f64,
    /// Largest single amount; `0.0` without expenses.
    pub largest: f64,
}

pub fn summarize(expenses: &[Expense], today: NaiveDate) -> ExpenseSummary {
    if expenses.is_empty() {
        return ExpenseSummary::default();
    }

    let total: f64 = expenses.iter().map(Expense::amount).sum();
    let this_month: f64 = expenses
        .iter()
        .filter(|e| {
            e.date()
                .is_some_and(|d| d.year() == today.year() && d.month() == today.month())
        })
        .map(Expense::amount)
        .sum();
    let largest = expenses
        .iter()
        .map(Expense::amount)
        .fold(f64::NEG_INFINITY, f64::max);

    ExpenseSummary {
        count: expenses.len(),
        total,
        this_month,
        average: total / expenses.len() as f64,
        largest,
    }
}
