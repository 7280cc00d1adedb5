//! Dynamic table record

use std::collections::HashMap;

use super::Value;

/// One row of a table: a mapping from field key to [`Value`].
///
/// Keys are not known to the engine ahead of time; every stage looks fields
/// up by the keys named in the schema and the active query state.
///
/// # Example
///
/// ```
/// use protable_lib::model::Record;
///
/// let record = Record::new()
///     .set("id", 1)
///     .set("status", "open");
///
/// assert_eq!(record.get("status"), Some(&"open".into()));
/// assert!(!record.contains("amount"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove() {
        let mut record = Record::new().set("name", "Contoso").set("note", Value::Null);
        record.insert("amount", 12.5);

        assert_eq!(record.get("amount"), Some(&Value::from(12.5)));
        assert_eq!(record.get("note"), Some(&Value::Null));
        assert_eq!(record.remove("name"), Some(Value::from("Contoso")));
        assert!(!record.contains("name"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_from_iter() {
        let record: Record = [("id", 1), ("amt", 30)].into_iter().collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("amt"), Some(&Value::from(30)));
    }
}
