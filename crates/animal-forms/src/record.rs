// File: src/record.rs
// Purpose: The name/description record bound from a submitted form

use crate::field_map::FieldMap;
use animal_forms_validation::{AcceptancePredicate, RequireName, Validate, ValidationFailure};
use serde::{Deserialize, Serialize};

/// A submitted animal: a required name and a free-form description.
///
/// Setters store values verbatim. Nothing is checked until [`validate_with`]
/// (or [`Validate::validate`]) is called.
///
/// [`validate_with`]: AnimalRecord::validate_with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimalRecord {
    name: Option<String>,
    description: Option<String>,
}

impl AnimalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Validate against an acceptance predicate.
    ///
    /// A missing or empty name always fails; otherwise the predicate decides.
    /// Whitespace-only names are left to the predicate (`RequireName` rejects them).
    /// Either way the failure carries the same fixed message.
    pub fn validate_with<P>(&self, predicate: &P) -> Result<(), ValidationFailure>
    where
        P: AcceptancePredicate + ?Sized,
    {
        match self.name() {
            Some(name) if !name.is_empty() && predicate.accept(name, self.description()) => Ok(()),
            _ => Err(ValidationFailure::invalid_name_or_description()),
        }
    }

    /// Project the record into a `name`/`description` map. Does not validate.
    pub fn to_field_map(&self) -> FieldMap {
        FieldMap::new(
            self.name().unwrap_or_default(),
            self.description().unwrap_or_default(),
        )
    }
}

impl Validate for AnimalRecord {
    fn validate(&self) -> Result<(), ValidationFailure> {
        self.validate_with(&RequireName)
    }
}
