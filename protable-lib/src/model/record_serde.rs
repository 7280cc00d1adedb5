//! JSON (de)serialization for Record.
//!
//! Records arrive as flat JSON objects from the data-fetching layer:
//! - Scalars map onto [`Value`]: `null`, booleans, numbers, strings
//! - Nested arrays and objects are dropped, since no stage can address them
//!
//! Serialization writes every field back as a flat object, nulls included.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a flat map representing a table record")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();

        while let Some(key) = map.next_key::<String>()? {
            let raw: serde_json::Value = map.next_value()?;
            match scalar(raw) {
                Some(value) => {
                    record.fields.insert(key, value);
                }
                None => log::trace!("dropping nested field '{}' from record", key),
            }
        }

        Ok(record)
    }
}

fn scalar(raw: serde_json::Value) -> Option<Value> {
    match raw {
        serde_json::Value::Null => Some(Value::Null),
        serde_json::Value::Bool(b) => Some(Value::Bool(b)),
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
        serde_json::Value::String(s) => Some(Value::String(s)),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}
