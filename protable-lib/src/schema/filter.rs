//! Enumerated equality filter descriptions.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;

/// One selectable value of a [`FilterSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterItem {
    /// The value a record's field must equal.
    pub key: Value,
    /// Display label.
    pub label: String,
}

impl FilterItem {
    /// Creates a new filter item.
    pub fn new(key: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// An enumerated equality filter on one field.
///
/// # Example
///
/// ```
/// use protable_lib::schema::{FilterItem, FilterSpec};
///
/// let status = FilterSpec::new("status", "Status")
///     .item(FilterItem::new("open", "Open"))
///     .item(FilterItem::new("paid", "Paid"));
///
/// assert!(status.has_item(&"open".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Field key in the records.
    pub key: String,
    /// Display label.
    pub label: String,
    /// The selectable values.
    #[serde(default)]
    pub items: Vec<FilterItem>,
}

impl FilterSpec {
    /// Creates a filter with no items.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Adds a selectable item (builder pattern).
    pub fn item(mut self, item: FilterItem) -> Self {
        self.items.push(item);
        self
    }

    /// Returns `true` if `value` is one of this filter's items.
    pub fn has_item(&self, value: &Value) -> bool {
        self.items.iter().any(|i| &i.key == value)
    }
}
