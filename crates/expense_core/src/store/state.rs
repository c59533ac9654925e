//! Pure expense/category state transitions.
//!
//! # Invariants
//! - Expense insertion order is preserved; nothing is deduplicated.
//! - Deleting a category never touches expenses that reference it.
//! - Operations on absent ids are no-ops, not errors.

use crate::model::category::{default_categories, Category, CategoryPatch};
use crate::model::expense::Expense;
use serde::{Deserialize, Serialize};

/// Serializable snapshot of everything the expense store owns.
///
/// Fields missing from a stored document take their initial values, so a
/// document without `categories` keeps its expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseState {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

impl Default for ExpenseState {
    /// No expenses and the fixed default category set.
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            categories: default_categories(),
        }
    }
}

impl ExpenseState {
    /// Appends one expense without validation.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Removes the first expense with `id`. Returns whether one was removed.
    pub fn delete_expense(&mut self, id: &str) -> bool {
        match self.expenses.iter().position(|e| e.id() == Some(id)) {
            Some(index) => {
                self.expenses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops every expense. Categories are kept.
    pub fn clear_all_expenses(&mut self) {
        self.expenses.clear();
    }

    /// Appends all `expenses` in order; duplicate ids are tolerated.
    pub fn import_expenses(&mut self, expenses: impl IntoIterator<Item = Expense>) {
        self.expenses.extend(expenses);
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Removes the first category with `id`. Referencing expenses are kept.
    pub fn delete_category(&mut self, id: &str) -> bool {
        match self.categories.iter().position(|c| c.id == id) {
            Some(index) => {
                self.categories.remove(index);
                true
            }
            None => false,
        }
    }

    /// Merges `patch` into the category with `id`. Returns whether it exists.
    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> bool {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::ExpenseState;
    use crate::model::category::{Category, CategoryPatch};
    use crate::model::expense::Expense;
    use serde_json::json;

    fn expense(id: &str) -> Expense {
        Expense::from_value(json!({ "id": id, "amount": 1.0 }))
    }

    fn ids(state: &ExpenseState) -> Vec<&str> {
        state.expenses.iter().filter_map(Expense::id).collect()
    }

    #[test]
    fn default_state_has_no_expenses_and_default_categories() {
        let state = ExpenseState::default();
        assert!(state.expenses.is_empty());
        assert_eq!(state.categories.len(), 8);
    }

    #[test]
    fn missing_fields_deserialize_to_initial_values() {
        let state: ExpenseState = serde_json::from_str(r#"{"expenses":[{"id":"1"}]}"#).unwrap();
        assert_eq!(ids(&state), vec!["1"]);
        assert_eq!(state.categories, ExpenseState::default().categories);

        let empty: ExpenseState = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ExpenseState::default());
    }

    #[test]
    fn delete_expense_removes_only_first_match() {
        let mut state = ExpenseState::default();
        state.import_expenses([expense("a"), expense("b"), expense("a")]);

        assert!(state.delete_expense("a"));
        assert_eq!(ids(&state), vec!["b", "a"]);
        assert!(!state.delete_expense("missing"));
    }

    #[test]
    fn update_category_is_noop_for_unknown_id() {
        let mut state = ExpenseState::default();
        let before = state.clone();
        let updated = state.update_category(
            "unknown",
            CategoryPatch {
                name: Some("x".to_string()),
                color: None,
            },
        );
        assert!(!updated);
        assert_eq!(state, before);
    }

    #[test]
    fn delete_category_keeps_referencing_expenses() {
        let mut state = ExpenseState::default();
        state.add_expense(Expense::from_value(json!({ "id": "1", "category": "food" })));

        assert!(state.delete_category("food"));
        assert!(state.find_category("food").is_none());
        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.expenses[0].category(), Some("food"));
    }

    #[test]
    fn add_category_appends_at_end() {
        let mut state = ExpenseState::default();
        state.add_category(Category::new("pets", "Pets", "#123456"));
        assert_eq!(state.categories.last().unwrap().id, "pets");
    }
}
