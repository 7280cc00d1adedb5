//! Static table schema.
//!
//! Descriptions supplied once per view by the caller:
//!
//! - [`Column`] - how one field is displayed
//! - [`SortOption`] - a field eligible for sorting
//! - [`FilterSpec`] - an enumerated equality filter on one field
//! - [`TableSchema`] - the three lists bundled together

mod column;
mod filter;
mod sort;

pub use column::Align;
pub use column::CellRenderer;
pub use column::Column;
pub use filter::FilterItem;
pub use filter::FilterSpec;
pub use sort::SortOption;

use serde::Deserialize;
use serde::Serialize;

/// The complete static schema of one table view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSchema {
    /// Displayed columns, in order.
    pub columns: Vec<Column>,
    /// Fields the user may sort by.
    pub sort_options: Vec<SortOption>,
    /// Enumerated filters the user may set.
    pub filters: Vec<FilterSpec>,
}

impl TableSchema {
    /// Creates a schema with the given columns and no sort or filter options.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Sets the sort options.
    pub fn with_sort_options(mut self, options: Vec<SortOption>) -> Self {
        self.sort_options = options;
        self
    }

    /// Sets the filter specifications.
    pub fn with_filters(mut self, filters: Vec<FilterSpec>) -> Self {
        self.filters = filters;
        self
    }

    /// Looks up a sort option by field key.
    pub fn sort_option(&self, key: &str) -> Option<&SortOption> {
        self.sort_options.iter().find(|o| o.key == key)
    }

    /// Looks up a filter specification by field key.
    pub fn filter_spec(&self, key: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|f| f.key == key)
    }

    /// Looks up a column by field key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }
}
