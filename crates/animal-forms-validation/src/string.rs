//! String validation functions

/// True when the value is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Required field check: present and not blank
pub fn validate_required(value: Option<&str>) -> Result<(), String> {
    match value {
        Some(s) if !is_blank(s) => Ok(()),
        _ => Err("This field is required".to_string()),
    }
}

/// Length is counted in characters, not bytes
pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}
