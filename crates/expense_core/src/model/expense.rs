//! Expense record and form draft.
//!
//! # Responsibility
//! - Hold one recorded outlay exactly as it was created or imported.
//! - Convert raw form input into a new expense after presence checks.
//!
//! # Invariants
//! - An `Expense` serializes back to the JSON it was built from, byte for
//!   byte in key order. Imported records are never backfilled.
//! - Accessors are lenient: a missing or malformed field reads as "absent"
//!   (or `0.0` for the amount) instead of failing.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Calendar date format used by `Expense::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One recorded monetary outlay.
///
/// Backed by the raw JSON value so that partial records coming from an
/// import (`{"id": "import1"}`) survive persistence and export unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expense(Value);

impl Expense {
    /// Creates a complete expense record.
    ///
    /// Field order is `id, amount, description, category, date, createdAt`.
    pub fn new(
        id: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
        created_at: impl Into<String>,
    ) -> Self {
        Self(json!({
            "id": id.into(),
            "amount": amount,
            "description": description.into(),
            "category": category.into(),
            "date": date.format(DATE_FORMAT).to_string(),
            "createdAt": created_at.into(),
        }))
    }

    /// Wraps an arbitrary JSON value without inspecting it.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn id(&self) -> Option<&str> {
        self.field("id").and_then(Value::as_str)
    }

    /// Amount in currency units; `0.0` when missing or not a finite number.
    pub fn amount(&self) -> f64 {
        self.field("amount")
            .and_then(Value::as_f64)
            .filter(|amount| amount.is_finite())
            .unwrap_or(0.0)
    }

    /// Free-text description; empty when missing.
    pub fn description(&self) -> &str {
        self.field("description")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn category(&self) -> Option<&str> {
        self.field("category").and_then(Value::as_str)
    }

    /// Calendar date of the expense.
    ///
    /// Accepts `YYYY-MM-DD` and datetime strings starting with it. Returns
    /// `None` for missing or unparseable dates.
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.field("date").and_then(Value::as_str)?;
        let day = raw.get(..10)?;
        NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
    }

    pub fn created_at(&self) -> Option<&str> {
        self.field("createdAt").and_then(Value::as_str)
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|object| object.get(name))
    }
}

/// Formats a timestamp the way `createdAt` is stored (`...T12:00:00.000Z`).
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Presence-check failure for expense form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    /// A required field is blank.
    MissingField(&'static str),
    /// `amount` is not a decimal number.
    InvalidAmount(String),
    /// `amount` is zero or negative.
    NonPositiveAmount(String),
    /// `date` is not `YYYY-MM-DD`.
    InvalidDate(String),
}

impl Display for ExpenseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is missing"),
            Self::InvalidAmount(value) => write!(f, "amount `{value}` is not a number"),
            Self::NonPositiveAmount(value) => {
                write!(f, "amount `{value}` must be greater than zero")
            }
            Self::InvalidDate(value) => write!(f, "date `{value}` is not in YYYY-MM-DD format"),
        }
    }
}

impl Error for ExpenseValidationError {}

/// Raw expense form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    /// Checks required fields and builds a new expense with a fresh id.
    ///
    /// # Errors
    /// - `MissingField` when `amount`, `category` or `date` is blank.
    /// - `InvalidAmount` / `NonPositiveAmount` for unusable amounts.
    /// - `InvalidDate` when `date` is not a calendar date.
    pub fn into_expense(self, now: DateTime<Utc>) -> Result<Expense, ExpenseValidationError> {
        let amount_text = self.amount.trim();
        let category = self.category.trim();
        let date_text = self.date.trim();

        if amount_text.is_empty() {
            return Err(ExpenseValidationError::MissingField("amount"));
        }
        if category.is_empty() {
            return Err(ExpenseValidationError::MissingField("category"));
        }
        if date_text.is_empty() {
            return Err(ExpenseValidationError::MissingField("date"));
        }

        let amount = amount_text
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| ExpenseValidationError::InvalidAmount(amount_text.to_string()))?;
        if amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount(
                amount_text.to_string(),
            ));
        }

        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
            .map_err(|_| ExpenseValidationError::InvalidDate(date_text.to_string()))?;

        Ok(Expense::new(
            Uuid::new_v4().to_string(),
            amount,
            self.description,
            category,
            date,
            format_timestamp(now),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{Expense, ExpenseDraft, ExpenseValidationError};
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::json;

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            amount: "12.50".to_string(),
            description: "Lunch".to_string(),
            category: "food".to_string(),
            date: "2024-03-09".to_string(),
        }
    }

    #[test]
    fn new_expense_serializes_fields_in_canonical_order() {
        let expense = Expense::new(
            "1",
            50.75,
            "Groceries",
            "food",
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            "2023-01-15T10:00:00.000Z",
        );

        let text = serde_json::to_string(&expense).unwrap();
        assert_eq!(
            text,
            r#"{"id":"1","amount":50.75,"description":"Groceries","category":"food","date":"2023-01-15","createdAt":"2023-01-15T10:00:00.000Z"}"#
        );
    }

    #[test]
    fn accessors_are_lenient_for_partial_records() {
        let expense = Expense::from_value(json!({ "id": "import1" }));

        assert_eq!(expense.id(), Some("import1"));
        assert_eq!(expense.amount(), 0.0);
        assert_eq!(expense.description(), "");
        assert_eq!(expense.category(), None);
        assert_eq!(expense.date(), None);
        assert_eq!(expense.created_at(), None);
    }

    #[test]
    fn accessors_tolerate_wrong_types_and_non_objects() {
        let wrong_types = Expense::from_value(json!({ "amount": "12", "date": 20240101 }));
        assert_eq!(wrong_types.amount(), 0.0);
        assert_eq!(wrong_types.date(), None);

        let scalar = Expense::from_value(json!(42));
        assert_eq!(scalar.id(), None);
        assert_eq!(scalar.amount(), 0.0);
    }

    #[test]
    fn date_accepts_datetime_prefix() {
        let expense = Expense::from_value(json!({ "date": "2024-02-29T08:30:00.000Z" }));
        assert_eq!(expense.date(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn draft_builds_expense_with_generated_id_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 18, 5, 0).unwrap();
        let expense = draft().into_expense(now).unwrap();

        assert!(!expense.id().unwrap().is_empty());
        assert_eq!(expense.amount(), 12.5);
        assert_eq!(expense.description(), "Lunch");
        assert_eq!(expense.category(), Some("food"));
        assert_eq!(expense.date(), NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(expense.created_at(), Some("2024-03-09T18:05:00.000Z"));
    }

    #[test]
    fn draft_ids_are_unique() {
        let now = Utc::now();
        let first = draft().into_expense(now).unwrap();
        let second = draft().into_expense(now).unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn draft_requires_amount_category_and_date() {
        let now = Utc::now();

        let missing_amount = ExpenseDraft {
            amount: "  ".to_string(),
            ..draft()
        };
        assert_eq!(
            missing_amount.into_expense(now).unwrap_err(),
            ExpenseValidationError::MissingField("amount")
        );

        let missing_category = ExpenseDraft {
            category: String::new(),
            ..draft()
        };
        assert_eq!(
            missing_category.into_expense(now).unwrap_err(),
            ExpenseValidationError::MissingField("category")
        );

        let missing_date = ExpenseDraft {
            date: String::new(),
            ..draft()
        };
        assert_eq!(
            missing_date.into_expense(now).unwrap_err(),
            ExpenseValidationError::MissingField("date")
        );
    }

    #[test]
    fn draft_description_is_optional() {
        let no_description = ExpenseDraft {
            description: String::new(),
            ..draft()
        };
        let expense = no_description.into_expense(Utc::now()).unwrap();
        assert_eq!(expense.description(), "");
    }

    #[test]
    fn draft_rejects_unusable_amounts_and_dates() {
        let now = Utc::now();

        let not_number = ExpenseDraft {
            amount: "abc".to_string(),
            ..draft()
        };
        assert!(matches!(
            not_number.into_expense(now),
            Err(ExpenseValidationError::InvalidAmount(_))
        ));

        let zero = ExpenseDraft {
            amount: "0".to_string(),
            ..draft()
        };
        assert!(matches!(
            zero.into_expense(now),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        let bad_date = ExpenseDraft {
            date: "09/03/2024".to_string(),
            ..draft()
        };
        assert!(matches!(
            bad_date.into_expense(now),
            Err(ExpenseValidationError::InvalidDate(_))
        ));
    }
}
