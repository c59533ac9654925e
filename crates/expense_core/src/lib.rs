//! Core domain logic for the expense tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod transfer;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{default_categories, Category, CategoryPatch};
pub use model::expense::{Expense, ExpenseDraft, ExpenseValidationError};
pub use model::theme::Theme;
pub use repo::kv_repo::{
    KvRepository, MemoryKvRepository, RepoError, RepoResult, SqliteKvRepository,
};
pub use store::expense_store::{ExpenseStore, EXPENSE_STORE_KEY};
pub use store::state::ExpenseState;
pub use store::theme_store::{ThemeStore, THEME_STORE_KEY};
pub use store::{StoreError, StoreResult};
pub use transfer::{
    export_expenses, export_file_name, import_expenses, parse_import, TransferError,
    TransferResult,
};
pub use view::breakdown::{category_totals, CategoryBreakdown, CategoryTotal};
pub use view::filter::{filter_expenses, sort_by_date_desc, visible_expenses, ExpenseFilter};
pub use view::series::{time_series, SeriesBucket, TimeRange};
pub use view::summary::{summarize, ExpenseSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
