//! Pagination stage and the derived page view.

use std::ops::Range;

use crate::model::Record;
use crate::schema::Column;

/// Pagination state: zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Creates pagination state for the given page.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Index of the first row of the page, saturating on overflow.
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    /// Number of pages needed to show `total` rows.
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        total.div_ceil(self.page_size)
    }
}

/// Returns the half-open window of a set of `len` rows covered by the page.
///
/// The window is empty when the page starts at or beyond the end of the set.
pub fn window(len: usize, pagination: &Pagination) -> Range<usize> {
    let start = pagination.offset();
    if start >= len {
        return len..len;
    }
    start..start.saturating_add(pagination.page_size).min(len)
}

/// Returns the rows of `rows` covered by the page.
pub fn slice<'a>(rows: &'a [usize], pagination: &Pagination) -> &'a [usize] {
    &rows[window(rows.len(), pagination)]
}

/// One page of derived rows, borrowed from the engine.
///
/// # Example
///
/// ```
/// use protable_lib::ProTable;
/// use protable_lib::model::Record;
/// use protable_lib::schema::TableSchema;
///
/// let records = vec![Record::new().set("id", 1), Record::new().set("id", 2)];
/// let mut table = ProTable::new(records, TableSchema::default());
/// let page = table.set_page_size(1);
///
/// assert_eq!(page.len(), 1);
/// assert_eq!(page.total_count(), 2);
/// assert!(page.has_more());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    records: &'a [Record],
    rows: &'a [usize],
    total_count: usize,
    pagination: Pagination,
}

impl<'a> Page<'a> {
    /// Creates a page over `records` showing `rows`.
    pub fn new(
        records: &'a [Record],
        rows: &'a [usize],
        total_count: usize,
        pagination: Pagination,
    ) -> Self {
        Self {
            records,
            rows,
            total_count,
            pagination,
        }
    }

    /// Returns the records of this page, in display order.
    pub fn records(&self) -> Vec<&'a Record> {
        self.iter().collect()
    }

    /// Iterates over the records of this page, in display order.
    pub fn iter(self) -> impl Iterator<Item = &'a Record> {
        let records = self.records;
        self.rows.iter().filter_map(move |&i| records.get(i))
    }

    /// Returns the input indices of this page's records.
    pub fn indices(&self) -> &'a [usize] {
        self.rows
    }

    /// Returns the record at a position within the page.
    pub fn get(&self, position: usize) -> Option<&'a Record> {
        self.rows.get(position).and_then(|&i| self.records.get(i))
    }

    /// Renders every cell of the page, row by row.
    pub fn cells(&self, columns: &[Column]) -> Vec<Vec<String>> {
        self.iter()
            .enumerate()
            .map(|(row, record)| {
                columns
                    .iter()
                    .map(|column| column.render_cell(record, row))
                    .collect()
            })
            .collect()
    }

    /// Size of the filtered set the page was cut from.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Zero-based index of this page.
    pub fn page_index(&self) -> usize {
        self.pagination.page_index
    }

    /// Maximum number of records per page.
    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    /// Number of pages in the filtered set.
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.total_count)
    }

    /// Returns `true` if rows follow this page.
    pub fn has_more(&self) -> bool {
        if self.pagination.page_size == 0 {
            return false;
        }
        self.pagination.offset().saturating_add(self.pagination.page_size) < self.total_count
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
