//! Interaction state of a table view.

use crate::config::TableConfig;
use crate::query::ActiveFilters;
use crate::query::Direction;
use crate::query::Pagination;
use crate::query::SortSelection;

/// The transient, view-local query state driving a [`ProTable`](super::ProTable).
///
/// The sort direction is held independently of the sort field, so flipping
/// the direction before picking a field is remembered.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub(super) filters: ActiveFilters,
    pub(super) sort_field: Option<String>,
    pub(super) direction: Direction,
    pub(super) page_index: usize,
    pub(super) page_size: usize,
    pub(super) filter_panel_open: bool,
}

impl TableState {
    /// Creates the initial state for a config: first page, no filters, no sort.
    pub fn new(config: &TableConfig) -> Self {
        Self {
            filters: ActiveFilters::new(),
            sort_field: None,
            direction: config.default_direction,
            page_index: 0,
            page_size: config.default_page_size,
            filter_panel_open: false,
        }
    }

    /// The active filters.
    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    /// The selected sort field, if any.
    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref()
    }

    /// The current sort direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The active sort, if a field is selected.
    pub fn sort(&self) -> Option<SortSelection> {
        self.sort_field.as_ref().map(|field| SortSelection {
            field: field.clone(),
            direction: self.direction,
        })
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The current page as pagination state.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page_index, self.page_size)
    }

    /// Whether the filter/sort panel is open.
    pub fn filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }
}
