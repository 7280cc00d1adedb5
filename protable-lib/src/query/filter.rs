//! Filter stage.

use std::collections::HashMap;

use crate::model::Record;
use crate::model::Value;

/// The active filter state: field key to the single selected value.
///
/// A key absent from the mapping places no constraint on the records.
///
/// # Example
///
/// ```
/// use protable_lib::model::Record;
/// use protable_lib::query::ActiveFilters;
///
/// let mut filters = ActiveFilters::new();
/// filters.set("status", "open");
///
/// assert!(filters.matches(&Record::new().set("status", "open")));
/// assert!(!filters.matches(&Record::new().set("status", "paid")));
/// assert!(!filters.matches(&Record::new()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveFilters {
    values: HashMap<String, Value>,
}

impl ActiveFilters {
    /// Creates an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selected value for a field, returning the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Deactivates the filter on a field, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Deactivates every filter.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns the selected value for a field, if active.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns `true` if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of active filters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the active `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if `record` has every active key with an equal value.
    pub fn matches(&self, record: &Record) -> bool {
        self.values
            .iter()
            .all(|(key, expected)| record.get(key) == Some(expected))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ActiveFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Returns the indices of the records matching every active filter, in input
/// order.
pub fn apply(records: &[Record], filters: &ActiveFilters) -> Vec<usize> {
    retain(records, super::all_rows(records.len()), filters)
}

/// Keeps the rows of `rows` whose records match every active filter.
///
/// With no active filter the rows are returned unchanged.
pub fn retain(records: &[Record], mut rows: Vec<usize>, filters: &ActiveFilters) -> Vec<usize> {
    if filters.is_empty() {
        return rows;
    }
    rows.retain(|&i| records.get(i).is_some_and(|r| filters.matches(r)));
    rows
}
