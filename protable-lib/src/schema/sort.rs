//! Sortable field descriptions.

use serde::Deserialize;
use serde::Serialize;

/// A field the user may sort by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    /// Field key in the records.
    pub key: String,
    /// Display label.
    pub label: String,
}

impl SortOption {
    /// Creates a new sort option.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}
