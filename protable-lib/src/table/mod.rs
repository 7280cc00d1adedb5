//! Query engine - drives the filter, sort and pagination stages from
//! interaction state.
//!
//! The engine owns the record set, the static schema and a [`TableState`].
//! Every transition updates the state and re-runs the whole pipeline, so the
//! derived page is always consistent with the current state.

mod state;

use std::ops::Range;

pub use state::TableState;

use crate::config::PipelineOrder;
use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::model::Record;
use crate::model::Value;
use crate::query::Direction;
use crate::query::Page;
use crate::query::SortSelection;
use crate::query::filter;
use crate::query::order;
use crate::query::page;
use crate::schema::TableSchema;

/// A filtered, sorted, paginated view over an in-memory record set.
///
/// # Example
///
/// ```
/// use protable_lib::ProTable;
/// use protable_lib::model::{Record, Value};
/// use protable_lib::query::Direction;
/// use protable_lib::schema::TableSchema;
///
/// let records = vec![
///     Record::new().set("id", 1).set("amt", 30),
///     Record::new().set("id", 2).set("amt", 10),
///     Record::new().set("id", 3).set("amt", 20),
/// ];
/// let mut table = ProTable::new(records, TableSchema::default());
/// table.set_page_size(2);
/// table.set_sort_field("amt");
///
/// let page = table.set_sort_direction(Direction::Asc);
/// let ids: Vec<_> = page.iter().filter_map(|r| r.get("id")).collect();
///
/// assert_eq!(ids, vec![&Value::from(2), &Value::from(3)]);
/// assert_eq!(page.total_count(), 3);
/// ```
#[derive(Debug)]
pub struct ProTable {
    records: Vec<Record>,
    schema: TableSchema,
    config: TableConfig,
    state: TableState,
    /// Derived row order: filtered, and sorted as the pipeline dictates.
    rows: Vec<usize>,
    /// The visible window into `rows`.
    window: Range<usize>,
    revision: u64,
    dirty: bool,
}

impl ProTable {
    /// Create a table with the default configuration.
    pub fn new(records: Vec<Record>, schema: TableSchema) -> Self {
        Self::build(records, schema, TableConfig::default())
    }

    /// Create a table with a custom configuration.
    pub fn with_config(
        records: Vec<Record>,
        schema: TableSchema,
        config: TableConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(records, schema, config))
    }

    fn build(records: Vec<Record>, schema: TableSchema, config: TableConfig) -> Self {
        let state = TableState::new(&config);
        let mut table = Self {
            records,
            schema,
            config,
            state,
            rows: Vec::new(),
            window: 0..0,
            revision: 0,
            dirty: false,
        };
        table.recompute();
        table
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// The current page.
    pub fn page(&self) -> Page<'_> {
        Page::new(
            &self.records,
            &self.rows[self.window.clone()],
            self.rows.len(),
            self.state.pagination(),
        )
    }

    /// Number of records passing the active filters.
    pub fn filtered_count(&self) -> usize {
        self.rows.len()
    }

    /// Re-run the pipeline against the current state.
    fn recompute(&mut self) {
        let pagination = self.state.pagination();
        let sort = self.state.sort();
        let filtered = filter::apply(&self.records, &self.state.filters);

        let (rows, window) = match self.config.pipeline {
            PipelineOrder::FilterSortPaginate => {
                let rows = order::apply(&self.records, filtered, sort.as_ref());
                let window = page::window(rows.len(), &pagination);
                (rows, window)
            }
            PipelineOrder::FilterPaginateSort => {
                let mut rows = filtered;
                let window = page::window(rows.len(), &pagination);
                let sorted = order::apply(&self.records, rows[window.clone()].to_vec(), sort.as_ref());
                rows[window.clone()].copy_from_slice(&sorted);
                (rows, window)
            }
        };

        log::trace!(
            "recompute: {} of {} records pass filters, window {:?}",
            rows.len(),
            self.records.len(),
            window
        );

        self.rows = rows;
        self.window = window;
        self.revision += 1;
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    /// Select a value for a filter and return the new page.
    ///
    /// The page index is kept unless the config asks for a reset.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Page<'_> {
        let key = key.into();
        let value = value.into();
        match self.schema.filter_spec(&key) {
            None => log::debug!("filter '{}' is not declared in the schema", key),
            Some(spec) if !spec.has_item(&value) => {
                log::debug!("filter '{}' has no item {:?}", key, value)
            }
            Some(_) => {}
        }
        log::debug!("set_filter: {} = {:?}", key, value);
        self.state.filters.set(key, value);
        self.after_filter_change()
    }

    /// Deactivate one filter and return the new page.
    pub fn clear_filter(&mut self, key: &str) -> Page<'_> {
        log::debug!("clear_filter: {}", key);
        self.state.filters.remove(key);
        self.after_filter_change()
    }

    /// Deactivate every filter and return the new page.
    pub fn clear_filters(&mut self) -> Page<'_> {
        log::debug!("clear_filters");
        self.state.filters.clear();
        self.after_filter_change()
    }

    fn after_filter_change(&mut self) -> Page<'_> {
        if self.config.reset_page_on_filter {
            self.state.page_index = 0;
        }
        self.recompute();
        self.page()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Select the sort field, keeping the current direction.
    pub fn set_sort_field(&mut self, key: impl Into<String>) -> Page<'_> {
        let key = key.into();
        self.check_sort_key(&key);
        log::debug!("set_sort_field: {}", key);
        self.state.sort_field = Some(key);
        self.recompute();
        self.page()
    }

    /// Toggle sort for a field.
    ///
    /// If the field is already sorted, toggles the direction.
    /// If sorting a different field, sorts ascending.
    pub fn toggle_sort(&mut self, key: impl Into<String>) -> Page<'_> {
        let key = key.into();
        self.check_sort_key(&key);
        self.state.direction = match self.state.sort_field.as_deref() {
            Some(current) if current == key => self.state.direction.reversed(),
            _ => Direction::Asc,
        };
        log::debug!("toggle_sort: {} {:?}", key, self.state.direction);
        self.state.sort_field = Some(key);
        self.recompute();
        self.page()
    }

    /// Set the sort direction.
    pub fn set_sort_direction(&mut self, direction: Direction) -> Page<'_> {
        log::debug!("set_sort_direction: {:?}", direction);
        self.state.direction = direction;
        self.recompute();
        self.page()
    }

    /// Flip the sort direction.
    pub fn toggle_sort_direction(&mut self) -> Page<'_> {
        let direction = self.state.direction.reversed();
        self.set_sort_direction(direction)
    }

    /// Clear the sort field; the direction is kept.
    pub fn clear_sort(&mut self) -> Page<'_> {
        log::debug!("clear_sort");
        self.state.sort_field = None;
        self.recompute();
        self.page()
    }

    fn check_sort_key(&self, key: &str) {
        if self.schema.sort_option(key).is_none() {
            log::debug!("sort field '{}' is not declared in the schema", key);
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Go to a page. Out-of-range pages are empty.
    pub fn set_page(&mut self, index: usize) -> Page<'_> {
        log::debug!("set_page: {}", index);
        self.state.page_index = index;
        self.recompute();
        self.page()
    }

    /// Go to the next page if rows follow the current one.
    pub fn next_page(&mut self) -> Page<'_> {
        if self.page().has_more() {
            let index = self.state.page_index + 1;
            return self.set_page(index);
        }
        self.page()
    }

    /// Go to the previous page, stopping at the first.
    pub fn previous_page(&mut self) -> Page<'_> {
        let index = self.state.page_index.saturating_sub(1);
        self.set_page(index)
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Page<'_> {
        if !self.config.allows_page_size(size) {
            log::warn!(
                "page size {} is not one of {:?}",
                size,
                self.config.page_size_options
            );
        }
        log::debug!("set_page_size: {}", size);
        self.state.page_size = size;
        self.state.page_index = 0;
        self.recompute();
        self.page()
    }

    // -------------------------------------------------------------------------
    // Records
    // -------------------------------------------------------------------------

    /// Replace the record set (e.g. after a refetch) and return the new page.
    pub fn set_records(&mut self, records: Vec<Record>) -> Page<'_> {
        log::debug!("set_records: {} records", records.len());
        self.records = records;
        self.recompute();
        self.page()
    }

    /// All records, in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    // -------------------------------------------------------------------------
    // Panel
    // -------------------------------------------------------------------------

    /// Open or close the filter/sort panel. Returns whether it is now open.
    pub fn toggle_filter_panel(&mut self) -> bool {
        self.state.filter_panel_open = !self.state.filter_panel_open;
        self.dirty = true;
        self.state.filter_panel_open
    }

    /// Whether the filter/sort panel is open.
    pub fn filter_panel_open(&self) -> bool {
        self.state.filter_panel_open
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The static schema.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// The configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The interaction state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// The active sort, if a field is selected.
    pub fn sort(&self) -> Option<SortSelection> {
        self.state.sort()
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> usize {
        self.state.page_index
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    /// Page sizes offered to the user.
    pub fn page_size_options(&self) -> &[usize] {
        &self.config.page_size_options
    }

    /// Number of times the pipeline has run.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check if the view changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
