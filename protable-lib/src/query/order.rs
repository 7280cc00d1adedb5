//! Sort stage.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;
use crate::model::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    #[default]
    Desc,
}

impl Direction {
    /// Maps an "ascending" flag onto a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending { Direction::Asc } else { Direction::Desc }
    }

    /// Returns `true` for [`Direction::Asc`].
    pub fn is_ascending(self) -> bool {
        self == Direction::Asc
    }

    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// The active sort: one field and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSelection {
    pub field: String,
    pub direction: Direction,
}

impl SortSelection {
    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

/// Orders `rows` by the selected field, stably.
///
/// The first row holding a rankable value (see [`Value::rank_kind`]) fixes
/// the field's kind. Rows whose value is missing, null, NaN or of another
/// kind tie with everything and keep their positions; the remaining rows are
/// stably sorted into the other positions. With no selection, or no rankable
/// value at all, the rows are returned unchanged.
pub fn apply(records: &[Record], rows: Vec<usize>, selection: Option<&SortSelection>) -> Vec<usize> {
    let Some(selection) = selection else {
        return rows;
    };
    let field = selection.field.as_str();
    let value_of = |i: usize| records.get(i).and_then(|r| r.get(field));

    let Some(kind) = rows
        .iter()
        .find_map(|&i| value_of(i).and_then(Value::rank_kind))
    else {
        log::debug!("sort field '{}' has no rankable values", field);
        return rows;
    };

    let mut slots = Vec::with_capacity(rows.len());
    let mut ranked: Vec<(usize, &Value)> = Vec::with_capacity(rows.len());
    for (slot, &i) in rows.iter().enumerate() {
        if let Some(value) = value_of(i)
            && value.rank_kind() == Some(kind)
        {
            slots.push(slot);
            ranked.push((i, value));
        }
    }

    ranked.sort_by(|(_, a), (_, b)| {
        selection
            .direction
            .apply(a.compare(b).unwrap_or(Ordering::Equal))
    });

    let mut out = rows;
    for (slot, (i, _)) in slots.into_iter().zip(ranked) {
        out[slot] = i;
    }
    out
}
