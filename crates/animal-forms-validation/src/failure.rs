//! Validation failure type

use std::borrow::Cow;
use thiserror::Error;

/// Message reported when a record fails its acceptance check
pub const INVALID_NAME_OR_DESCRIPTION: &str = "Invalid Name Or Description";

/// A record did not meet its acceptance criteria.
///
/// The message is meant to be shown to the end user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    message: Cow<'static, str>,
}

impl ValidationFailure {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The fixed failure for name/description records
    pub fn invalid_name_or_description() -> Self {
        Self::new(INVALID_NAME_OR_DESCRIPTION)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
