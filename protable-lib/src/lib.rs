//! In-memory table query engine
//!
//! Takes a resident record set plus a column/sort/filter schema and derives a
//! filtered, sorted, paginated view of it, driven by interaction state.

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod schema;
pub mod table;

pub use config::PipelineOrder;
pub use config::TableConfig;
pub use table::ProTable;
pub use table::TableState;
