// File: src/field_map.rs
// Purpose: Ordered name/description projection of a record

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

pub const NAME_FIELD: &str = "name";
pub const DESCRIPTION_FIELD: &str = "description";

/// Field-name to value mapping handed to persistence or rendering.
///
/// Always holds exactly two entries, `name` then `description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    entries: [(&'static str, String); 2],
}

impl FieldMap {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            entries: [
                (NAME_FIELD, name.into()),
                (DESCRIPTION_FIELD, description.into()),
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn into_hash_map(self) -> HashMap<String, String> {
        self.entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

impl From<FieldMap> for HashMap<String, String> {
    fn from(map: FieldMap) -> Self {
        map.into_hash_map()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
