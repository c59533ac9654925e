//! JSON import/export of the expense collection.
//!
//! # Responsibility
//! - Serialize expenses to the portable export format.
//! - Parse external JSON and append its elements to the store.
//!
//! # Invariants
//! - Export covers expenses only, never categories.
//! - Import is all-or-nothing: a document that is not a JSON array leaves
//!   the store untouched.
//! - Imported elements are appended verbatim, without per-field checks.
//! - File I/O belongs to the host; this module only handles text.

use crate::model::expense::Expense;
use crate::repo::kv_repo::KvRepository;
use crate::store::expense_store::ExpenseStore;
use crate::store::StoreError;
use chrono::NaiveDate;
use log::{info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TransferResult<T> = Result<T, TransferError>;

/// Import/export failure. None of these leave partial state behind.
#[derive(Debug)]
pub enum TransferError {
    /// Import text is not valid JSON.
    InvalidJson(serde_json::Error),
    /// Import JSON parsed, but the top-level value is not an array.
    NotAnArray { found: &'static str },
    /// Export serialization failed.
    Serialize(serde_json::Error),
    /// Imported records could not be persisted.
    Store(StoreError),
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(err) => write!(f, "import file is not valid JSON: {err}"),
            Self::NotAnArray { found } => {
                write!(f, "import file must contain a JSON array, found {found}")
            }
            Self::Serialize(err) => write!(f, "failed to serialize expenses: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson(err) | Self::Serialize(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotAnArray { .. } => None,
        }
    }
}

impl From<StoreError> for TransferError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Pretty-printed JSON array of `expenses`.
pub fn export_expenses(expenses: &[Expense]) -> TransferResult<String> {
    serde_json::to_string_pretty(expenses).map_err(|err| {
        warn!("event=export module=transfer status=error error={err}");
        TransferError::Serialize(err)
    })
}

/// Suggested export file name for `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("expense-tracker-export-{}.json", date.format("%Y-%m-%d"))
}

/// Parses import text into expense records.
///
/// # Errors
/// - `InvalidJson` when `text` is not JSON.
/// - `NotAnArray` when the top-level value is anything but an array.
pub fn parse_import(text: &str) -> TransferResult<Vec<Expense>> {
    let value: Value = serde_json::from_str(text).map_err(TransferError::InvalidJson)?;
    match value {
        Value::Array(items) => Ok(items.into_iter().map(Expense::from_value).collect()),
        other => Err(TransferError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Parses `text` and appends its records to `store`.
///
/// Returns the number of appended records. The store is not touched when
/// parsing fails.
pub fn import_expenses<R: KvRepository>(
    store: &mut ExpenseStore<R>,
    text: &str,
) -> TransferResult<usize> {
    let expenses = parse_import(text).map_err(|err| {
        warn!("event=import module=transfer status=error error={err}");
        err
    })?;
    let count = store.import_expenses(expenses)?;
    info!("event=import module=transfer status=ok count={count}");
    Ok(count)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
