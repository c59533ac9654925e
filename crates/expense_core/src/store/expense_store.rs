//! Persisted expense/category store.
//!
//! # Responsibility
//! - Wrap `ExpenseState` transitions with a full-state write per mutation.
//! - Restore state at start, falling back to defaults silently.
//!
//! # Invariants
//! - The in-memory update happens before the write; a failed write leaves
//!   memory ahead of storage and is reported through `StoreError`.
//! - Only this type writes `EXPENSE_STORE_KEY`.

use super::document::{load_document, save_document, StoreResult};
use super::state::ExpenseState;
use crate::model::category::{Category, CategoryPatch};
use crate::model::expense::Expense;
use crate::repo::kv_repo::KvRepository;
use log::info;

/// Storage key of the expense store document.
pub const EXPENSE_STORE_KEY: &str = "expense-tracker-storage";

/// Authoritative holder of expenses and categories.
pub struct ExpenseStore<R: KvRepository> {
    repo: R,
    state: ExpenseState,
}

impl<R: KvRepository> ExpenseStore<R> {
    /// Loads persisted state from `repo`, or starts from defaults.
    ///
    /// Never fails: absent or unparseable documents yield
    /// `ExpenseState::default()`.
    pub fn load(repo: R) -> Self {
        let state = load_document::<_, ExpenseState>(&repo, EXPENSE_STORE_KEY).unwrap_or_default();
        info!(
            "event=store_init module=store status=ok key={EXPENSE_STORE_KEY} expenses={} categories={}",
            state.expenses.len(),
            state.categories.len()
        );
        Self { repo, state }
    }

    /// Current state snapshot for derived views.
    pub fn state(&self) -> &ExpenseState {
        &self.state
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn add_expense(&mut self, expense: Expense) -> StoreResult<()> {
        self.commit("expense_add", |state| state.add_expense(expense))
    }

    /// Deletes the first expense with `id`; absent ids are a no-op.
    ///
    /// Returns whether an expense was removed.
    pub fn delete_expense(&mut self, id: &str) -> StoreResult<bool> {
        self.commit("expense_delete", |state| state.delete_expense(id))
    }

    pub fn clear_all_expenses(&mut self) -> StoreResult<()> {
        self.commit("expense_clear", ExpenseState::clear_all_expenses)
    }

    /// Appends every element in order. Returns how many were appended.
    pub fn import_expenses(&mut self, expenses: Vec<Expense>) -> StoreResult<usize> {
        let count = expenses.len();
        self.commit("expense_import", |state| state.import_expenses(expenses))?;
        Ok(count)
    }

    pub fn add_category(&mut self, category: Category) -> StoreResult<()> {
        self.commit("category_add", |state| state.add_category(category))
    }

    /// Deletes the first category with `id` without touching expenses.
    pub fn delete_category(&mut self, id: &str) -> StoreResult<bool> {
        self.commit("category_delete", |state| state.delete_category(id))
    }

    /// Merges `patch` into the category with `id`; absent ids are a no-op.
    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> StoreResult<bool> {
        self.commit("category_update", |state| state.update_category(id, patch))
    }

    /// Writes the current state without mutating it.
    pub fn save(&self) -> StoreResult<()> {
        save_document(&self.repo, EXPENSE_STORE_KEY, &self.state)
    }

    fn commit<T>(
        &mut self,
        event: &'static str,
        mutate: impl FnOnce(&mut ExpenseState) -> T,
    ) -> StoreResult<T> {
        let outcome = mutate(&mut self.state);
        self.save()?;
        info!(
            "event={event} module=store status=ok expenses={} categories={}",
            self.state.expenses.len(),
            self.state.categories.len()
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpenseStore, EXPENSE_STORE_KEY};
    use crate::model::expense::Expense;
    use crate::repo::kv_repo::{KvRepository, MemoryKvRepository};
    use serde_json::{json, Value};

    #[test]
    fn every_mutation_writes_versioned_envelope() {
        let repo = MemoryKvRepository::new();
        let mut store = ExpenseStore::load(&repo);
        assert!(repo.get_item(EXPENSE_STORE_KEY).unwrap().is_none());

        store
            .add_expense(Expense::from_value(json!({ "id": "1" })))
            .unwrap();

        let raw = repo.get_item(EXPENSE_STORE_KEY).unwrap().unwrap();
        let document: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(document["version"], json!(0));
        assert_eq!(document["state"]["expenses"], json!([{ "id": "1" }]));
        assert_eq!(
            document["state"]["categories"].as_array().unwrap().len(),
            8
        );
    }

    #[test]
    fn noop_delete_still_succeeds() {
        let repo = MemoryKvRepository::new();
        let mut store = ExpenseStore::load(&repo);
        assert!(!store.delete_expense("missing").unwrap());
        assert!(store.expenses().is_empty());
    }
}
