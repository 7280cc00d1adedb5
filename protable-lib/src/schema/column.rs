//! Column display descriptions.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;
use crate::model::Value;

static MISSING: Value = Value::Null;

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Inherit,
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Custom cell renderer.
///
/// Called with the field value (`Null` when the record lacks the field), the
/// whole record, and the row's position within the visible page.
#[derive(Clone)]
pub struct CellRenderer(Arc<dyn Fn(&Value, &Record, usize) -> String + Send + Sync>);

impl CellRenderer {
    /// Wraps a render function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &Record, usize) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Renders one cell.
    pub fn render(&self, value: &Value, record: &Record, row: usize) -> String {
        (self.0)(value, record, row)
    }
}

impl fmt::Debug for CellRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellRenderer(..)")
    }
}

/// A table column definition.
///
/// # Example
///
/// ```
/// use protable_lib::model::Record;
/// use protable_lib::schema::{Align, Column};
///
/// let amount = Column::new("amount", "Amount")
///     .align(Align::Right)
///     .render_with(|value, _, _| format!("${}", value));
///
/// let record = Record::new().set("amount", 30);
/// assert_eq!(amount.render_cell(&record, 0), "$30");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Column {
    /// Field key in the records.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Cell alignment.
    #[serde(default)]
    pub align: Align,
    /// Custom renderer; cells fall back to the value's display form.
    #[serde(skip)]
    pub renderer: Option<CellRenderer>,
}

impl Column {
    /// Create a new left-aligned column with the given key and label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            align: Align::default(),
            renderer: None,
        }
    }

    /// Set the cell alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set a custom cell renderer.
    pub fn render_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &Record, usize) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(CellRenderer::new(f));
        self
    }

    /// Render this column's cell for `record` at page position `row`.
    pub fn render_cell(&self, record: &Record, row: usize) -> String {
        let value = record.get(&self.key).unwrap_or(&MISSING);
        match &self.renderer {
            Some(renderer) => renderer.render(value, record, row),
            None => value.to_string(),
        }
    }
}
