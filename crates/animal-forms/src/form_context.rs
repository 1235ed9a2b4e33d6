// File: src/form_context.rs
// Purpose: Validation errors plus the original values, for re-displaying a rejected form

use std::collections::HashMap;

/// Error key for failures that belong to the whole form rather than one field
pub const FORM_ERROR_KEY: &str = "_form";

/// Context for forms that includes validation errors and original values
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    /// Field names to error messages
    pub errors: HashMap<String, String>,
    /// Original field values submitted
    pub values: HashMap<String, String>,
}

impl FormContext {
    pub fn new(errors: HashMap<String, String>, values: HashMap<String, String>) -> Self {
        Self { errors, values }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Context carrying a single form-level error
    pub fn with_form_error(message: impl Into<String>, values: HashMap<String, String>) -> Self {
        let mut errors = HashMap::new();
        errors.insert(FORM_ERROR_KEY.to_string(), message.into());
        Self::new(errors, values)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// The form-level error, if any
    pub fn global_error(&self) -> Option<&str> {
        self.get_error(FORM_ERROR_KEY)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn get_value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}
