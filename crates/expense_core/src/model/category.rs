//! Expense category model.
//!
//! # Invariants
//! - `id` is unique within the category collection and never changes.
//! - Updates are patch merges over `name` and `color` only.

use serde::{Deserialize, Serialize};

/// Label used when an expense references a category that does not exist.
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";
/// Color used when an expense references a category that does not exist.
pub const UNCATEGORIZED_COLOR: &str = "gray";

/// User-defined label for grouping expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Display label.
    pub name: String,
    /// Color value used for visual coding, usually `#RRGGBB`.
    pub color: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Merges supplied patch fields, leaving unspecified fields untouched.
    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Partial category update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none()
    }
}

/// Category set every fresh store starts with.
pub fn default_categories() -> Vec<Category> {
    [
        ("food", "Food & Dining", "#FF6B6B"),
        ("transport", "Transportation", "#4ECDC4"),
        ("housing", "Housing", "#45B7D1"),
        ("entertainment", "Entertainment", "#A66CFF"),
        ("utilities", "Utilities", "#FFD166"),
        ("healthcare", "Healthcare", "#FF8364"),
        ("shopping", "Shopping", "#06D6A0"),
        ("other", "Other", "#6D8A96"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category::new(id, name, color))
    .collect()
}
