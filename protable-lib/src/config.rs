//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::query::Direction;

/// Order in which the query stages run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineOrder {
    /// Filter, sort the whole filtered set, then cut the page.
    #[default]
    FilterSortPaginate,
    /// Filter, cut the page, then sort only the rows inside it.
    ///
    /// Ordering is not consistent across page boundaries in this mode.
    FilterPaginateSort,
}

/// Configuration for a [`ProTable`](crate::ProTable).
///
/// # Example
///
/// ```
/// use protable_lib::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size_options(vec![10, 20])
///     .with_default_page_size(10)
///     .with_reset_page_on_filter(true);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page sizes offered to the user.
    ///
    /// Default: 25, 50, 100
    pub page_size_options: Vec<usize>,

    /// Page size when the table is created.
    ///
    /// Default: 100
    pub default_page_size: usize,

    /// Sort direction when the table is created.
    ///
    /// Default: descending
    pub default_direction: Direction,

    /// Jump back to the first page whenever a filter changes.
    ///
    /// Default: false
    pub reset_page_on_filter: bool,

    /// Stage order of the query pipeline.
    ///
    /// Default: filter, sort, paginate
    pub pipeline: PipelineOrder,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size_options: vec![25, 50, 100],
            default_page_size: 100,
            default_direction: Direction::Desc,
            reset_page_on_filter: false,
            pipeline: PipelineOrder::FilterSortPaginate,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offered page sizes.
    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Sets the initial page size.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the initial sort direction.
    pub fn with_default_direction(mut self, direction: Direction) -> Self {
        self.default_direction = direction;
        self
    }

    /// Sets whether filter changes reset the page index.
    pub fn with_reset_page_on_filter(mut self, reset: bool) -> Self {
        self.reset_page_on_filter = reset;
        self
    }

    /// Sets the stage order.
    pub fn with_pipeline(mut self, pipeline: PipelineOrder) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Returns `true` if `size` is one of the offered page sizes.
    pub fn allows_page_size(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }

    /// Checks the page size settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::EmptyPageSizes);
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.allows_page_size(self.default_page_size) {
            return Err(ConfigError::default_not_allowed(
                self.default_page_size,
                &self.page_size_options,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.default_page_size, 100);
        assert_eq!(config.page_size_options, vec![25, 50, 100]);
    }

    #[test]
    fn test_validate_errors() {
        assert_eq!(
            TableConfig::default()
                .with_page_size_options(vec![])
                .validate(),
            Err(ConfigError::EmptyPageSizes)
        );
        assert_eq!(
            TableConfig::default()
                .with_page_size_options(vec![0, 100])
                .validate(),
            Err(ConfigError::ZeroPageSize)
        );
        assert_eq!(
            TableConfig::default().with_default_page_size(10).validate(),
            Err(ConfigError::default_not_allowed(10, &[25, 50, 100]))
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TableConfig =
            serde_json::from_str(r#"{"default_page_size": 25, "pipeline": "filter_paginate_sort"}"#)
                .unwrap();
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.pipeline, PipelineOrder::FilterPaginateSort);
        assert_eq!(config.page_size_options, vec![25, 50, 100]);
        assert_eq!(config.default_direction, Direction::Desc);
    }
}
