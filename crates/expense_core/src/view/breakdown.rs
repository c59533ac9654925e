//! Per-category totals for pie/donut style charts.

use crate::model::category::Category;
use crate::model::expense::Expense;

/// Summed amount for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub total: f64,
}

impl CategoryTotal {
    /// Percentage of `grand_total` this category accounts for.
    pub fn share_of(&self, grand_total: f64) -> f64 {
        if grand_total > 0.0 {
            self.total / grand_total * 100.0
        } else {
            0.0
        }
    }
}

/// Categories with spending, in category order, plus their combined total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    pub items: Vec<CategoryTotal>,
    /// Sum of `items[..].total`; denominator for shares.
    pub total: f64,
}

impl CategoryBreakdown {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sums expense amounts per existing category.
///
/// Categories without a positive total are left out. Expenses referencing
/// unknown categories do not contribute.
pub fn category_totals(expenses: &[Expense], categories: &[Category]) -> CategoryBreakdown {
    let items: Vec<CategoryTotal> = categories
        .iter()
        .map(|category| CategoryTotal {
            category_id: category.id.clone(),
            name: category.name.clone(),
            color: category.color.clone(),
            total: expenses
                .iter()
                .filter(|e| e.category() == Some(category.id.as_str()))
                .map(Expense::amount)
                .sum(),
        })
        .filter(|item| item.total > 0.0)
        .collect();
    let total: f64 = items.iter().map(|item| item.total).sum();

    CategoryBreakdown { items, total }
}
