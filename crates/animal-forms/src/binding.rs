// File: src/binding.rs
// Purpose: Turn submitted form data into a typed record

use crate::form_data::FormData;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("Failed to parse form data: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Convert form fields to a JSON object for deserialization.
///
/// Values stay strings; a name like "123" must not turn into a number.
pub fn form_to_json(form_data: &FormData) -> JsonValue {
    let map = form_data
        .as_map()
        .iter()
        .map(|(key, value)| (key.clone(), JsonValue::String(value.clone())))
        .collect();
    JsonValue::Object(map)
}

/// Deserialize form data into a typed struct. Raw JSON wins when present.
pub fn bind<T: DeserializeOwned>(form_data: &FormData) -> Result<T, BindError> {
    if let Some(raw_json) = form_data.json() {
        return Ok(serde_json::from_value(raw_json.clone())?);
    }

    Ok(serde_json::from_value(form_to_json(form_data))?)
}
