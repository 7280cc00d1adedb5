//! Configuration error types

/// Errors reported by [`TableConfig::validate`](crate::TableConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No page sizes were offered.
    #[error("Page size options must not be empty")]
    EmptyPageSizes,

    /// A page size of zero was offered.
    #[error("Page size options must be greater than zero")]
    ZeroPageSize,

    /// The default page size is not one of the offered options.
    #[error("Default page size {size} is not one of {options:?}")]
    DefaultPageSizeNotAllowed { size: usize, options: Vec<usize> },
}

impl ConfigError {
    /// Creates a new default-page-size error.
    pub fn default_not_allowed(size: usize, options: &[usize]) -> Self {
        Self::DefaultPageSizeNotAllowed {
            size,
            options: options.to_vec(),
        }
    }
}
