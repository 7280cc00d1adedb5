//! Query stages over a resident record set.
//!
//! Each stage is a pure function over row indices into the caller's record
//! slice; an index is a row's identity, so every derived set is a subset of
//! the input by construction.
//!
//! - [`filter`] - conjunction of equality constraints ([`ActiveFilters`])
//! - [`order`] - stable single-field ordering ([`SortSelection`])
//! - [`page`] - fixed-size window ([`Pagination`], [`Page`])

pub mod filter;
pub mod order;
pub mod page;

pub use filter::ActiveFilters;
pub use order::Direction;
pub use order::SortSelection;
pub use page::Page;
pub use page::Pagination;

/// Returns the identity row order for `len` records.
pub fn all_rows(len: usize) -> Vec<usize> {
    (0..len).collect()
}
