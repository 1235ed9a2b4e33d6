// File: src/form_data.rs
// Purpose: Raw submitted form fields, as handed over by the web framework

use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Untrusted name/value pairs from a form submission
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    raw_json: Option<JsonValue>,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from form fields with automatic trimming
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let trimmed_fields = fields
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .collect();

        Self {
            fields: trimmed_fields,
            raw_json: None,
        }
    }

    /// Create from form fields, keeping values verbatim
    pub fn from_fields_untrimmed(fields: HashMap<String, String>) -> Self {
        Self {
            fields,
            raw_json: None,
        }
    }

    /// Create from a JSON body. String values are trimmed in the field view;
    /// the raw JSON is kept as submitted.
    pub fn from_json(json: JsonValue) -> Self {
        let mut fields = HashMap::new();

        if let JsonValue::Object(map) = &json {
            for (key, value) in map {
                match value {
                    JsonValue::String(s) => {
                        fields.insert(key.clone(), s.trim().to_string());
                    }
                    JsonValue::Null => {}
                    other => {
                        fields.insert(key.clone(), other.to_string());
                    }
                }
            }
        }

        Self {
            fields,
            raw_json: Some(json),
        }
    }

    /// Get a form field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Check if a field exists
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Get raw JSON if available
    pub fn json(&self) -> Option<&JsonValue> {
        self.raw_json.as_ref()
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.raw_json.is_none()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_fields(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
