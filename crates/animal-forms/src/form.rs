// File: src/form.rs
// Purpose: Form factory and the bind-then-validate pipeline for animal records

use crate::binding::bind;
use crate::config::{FormsConfig, ValidationConfig};
use crate::field_map::FieldMap;
use crate::form_context::FormContext;
use crate::form_data::FormData;
use crate::record::AnimalRecord;
use animal_forms_validation::{
    AcceptancePredicate, AllOf, MaxLength, NamePattern, RequireName, ValidationFailure,
};
use anyhow::{Context, Result};
use std::fmt;
use std::sync::Arc;

/// Result of the form pipeline
#[derive(Debug)]
pub enum FormResult<T> {
    /// Binding and validation passed, data is ready for processing
    Valid(T),
    /// Rejected; contains errors and original form values
    Invalid(FormContext),
}

impl<T> FormResult<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, FormResult::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Extract the valid value if validation passed
    pub fn ok(self) -> Option<T> {
        match self {
            FormResult::Valid(data) => Some(data),
            FormResult::Invalid(_) => None,
        }
    }

    /// Extract the form context if validation failed
    pub fn err(self) -> Option<FormContext> {
        match self {
            FormResult::Valid(_) => None,
            FormResult::Invalid(context) => Some(context),
        }
    }
}

/// Builds forms that share one acceptance predicate and settings.
///
/// Construct it once and pass it to whatever handles submissions; there is
/// no process-wide instance.
#[derive(Clone)]
pub struct FormFactory {
    predicate: Arc<dyn AcceptancePredicate>,
    settings: ValidationConfig,
}

impl FormFactory {
    /// Factory with the default required-name rule
    pub fn new() -> Self {
        Self::with_predicate(RequireName)
    }

    pub fn with_predicate(predicate: impl AcceptancePredicate + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
            settings: ValidationConfig::default(),
        }
    }

    /// Build the predicate from configuration: required name, then any
    /// configured length limits and name pattern.
    pub fn from_config(config: &FormsConfig) -> Result<Self> {
        let settings = config.validation.clone();
        let mut predicate = AllOf::new().and(RequireName);

        if settings.max_name_length.is_some() || settings.max_description_length.is_some() {
            predicate.push(MaxLength {
                name: settings.max_name_length,
                description: settings.max_description_length,
            });
        }

        if let Some(pattern) = &settings.name_pattern {
            let pattern = NamePattern::new(pattern)
                .with_context(|| format!("Invalid name_pattern: {:?}", pattern))?;
            predicate.push(pattern);
        }

        tracing::debug!(rules = predicate.len(), "Form factory configured");

        Ok(Self {
            predicate: Arc::new(predicate),
            settings,
        })
    }

    pub fn settings(&self) -> &ValidationConfig {
        &self.settings
    }

    pub fn animal_form(&self) -> AnimalForm {
        AnimalForm {
            predicate: Arc::clone(&self.predicate),
            trim_whitespace: self.settings.trim_whitespace,
        }
    }
}

impl Default for FormFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFactory")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// The animal form: binds submissions into [`AnimalRecord`]s and validates them
#[derive(Clone)]
pub struct AnimalForm {
    predicate: Arc<dyn AcceptancePredicate>,
    trim_whitespace: bool,
}

impl AnimalForm {
    /// Validate an already-built record with this form's predicate
    pub fn validate(&self, record: &AnimalRecord) -> Result<(), ValidationFailure> {
        record.validate_with(self.predicate.as_ref())
    }

    /// Validate, then project. Invalid records never reach the field map.
    pub fn submit(&self, record: &AnimalRecord) -> Result<FieldMap, ValidationFailure> {
        self.validate(record)?;
        Ok(record.to_field_map())
    }

    /// Execute the pipeline:
    /// 1. Deserialize form data into a record
    /// 2. Validate it against the predicate
    /// 3. Return the record, or the errors with the original values
    pub fn bind(&self, form_data: &FormData) -> FormResult<AnimalRecord> {
        let values = form_data.as_map().clone();

        let mut record = match bind::<AnimalRecord>(form_data) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Form data could not be bound");
                return FormResult::Invalid(FormContext::with_form_error(e.to_string(), values));
            }
        };

        if self.trim_whitespace {
            trim_fields(&mut record);
        }

        match self.validate(&record) {
            Ok(()) => {
                tracing::debug!("Animal form accepted");
                FormResult::Valid(record)
            }
            Err(failure) => {
                tracing::warn!(reason = %failure, "Animal form rejected");
                FormResult::Invalid(FormContext::with_form_error(failure.message(), values))
            }
        }
    }
}

impl fmt::Debug for AnimalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimalForm")
            .field("trim_whitespace", &self.trim_whitespace)
            .finish_non_exhaustive()
    }
}

fn trim_fields(record: &mut AnimalRecord) {
    if let Some(name) = record.name().map(str::trim).map(str::to_string) {
        record.set_name(name);
    }
    if let Some(description) = record.description().map(str::trim).map(str::to_string) {
        record.set_description(description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animal_forms_validation::{UniqueName, INVALID_NAME_OR_DESCRIPTION};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::{HashMap, HashSet};

    fn form_data(pairs: &[(&str, &str)]) -> FormData {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_valid_submission() {
        let form = FormFactory::new().animal_form();
        let result = form.bind(&form_data(&[("name", "dog"), ("description", "mans best friend")]));

        assert!(result.is_valid());
        let record = result.ok().expect("Should be valid");
        assert_eq!(record.name(), Some("dog"));
    }

    #[test]
    fn test_empty_name_rejected_with_values_kept() {
        let form = FormFactory::new().animal_form();
        let result = form.bind(&form_data(&[("name", ""), ("description", "x")]));

        assert!(result.is_invalid());
        let context = result.err().expect("Should have errors");
        assert_eq!(context.global_error(), Some(INVALID_NAME_OR_DESCRIPTION));
        assert_eq!(context.get_value("description"), Some("x"));
    }

    #[test]
    fn test_missing_name_rejected() {
        let form = FormFactory::new().animal_form();
        let result = form.bind(&form_data(&[("description", "x")]));
        assert!(result.is_invalid());
    }

    #[test]
    fn test_bind_error_reported_as_form_error() {
        let form = FormFactory::new().animal_form();
        let result = form.bind(&FormData::from_json(json!({ "name": ["not", "text"] })));

        let context = result.err().expect("Should have bind error");
        let message = context.global_error().expect("Expected _form error");
        assert!(message.starts_with("Failed to parse form data:"));
    }

    #[test]
    fn test_json_values_trimmed_when_configured() {
        let form = FormFactory::new().animal_form();
        let record = form
            .bind(&FormData::from_json(json!({ "name": "  dog  " })))
            .ok()
            .expect("Should be valid");
        assert_eq!(record.name(), Some("dog"));
    }

    #[test]
    fn test_trimming_can_be_disabled() {
        let mut config = FormsConfig::default();
        config.validation.trim_whitespace = false;
        let form = FormFactory::from_config(&config).unwrap().animal_form();

        let record = form
            .bind(&FormData::from_json(json!({ "name": " dog " })))
            .ok()
            .expect("Should be valid");
        assert_eq!(record.name(), Some(" dog "));
    }

    #[test]
    fn test_untrimmed_fields_follow_setting() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), " dog ".to_string());
        fields.insert("description".to_string(), " loyal ".to_string());
        let submission = FormData::from_fields_untrimmed(fields);

        let trimmed = FormFactory::new()
            .animal_form()
            .bind(&submission)
            .ok()
            .expect("Should be valid");
        assert_eq!(trimmed.name(), Some("dog"));
        assert_eq!(trimmed.description(), Some("loyal"));

        let mut config = FormsConfig::default();
        config.validation.trim_whitespace = false;
        let kept = FormFactory::from_config(&config)
            .unwrap()
            .animal_form()
            .bind(&submission)
            .ok()
            .expect("Should be valid");
        assert_eq!(kept.name(), Some(" dog "));
        assert_eq!(kept.description(), Some(" loyal "));
    }

    #[test]
    fn test_injected_predicate() {
        let taken: HashSet<String> = ["dog".to_string()].into_iter().collect();
        let form = FormFactory::with_predicate(UniqueName::new(taken)).animal_form();

        assert!(form.bind(&form_data(&[("name", "Dog")])).is_invalid());
        assert!(form.bind(&form_data(&[("name", "cat")])).is_valid());
    }

    #[test]
    fn test_from_config_limits() {
        let mut config = FormsConfig::default();
        config.validation.max_name_length = Some(5);
        config.validation.name_pattern = Some("^[a-z]+$".to_string());
        let form = FormFactory::from_config(&config).unwrap().animal_form();

        assert!(form.bind(&form_data(&[("name", "dog")])).is_valid());
        assert!(form.bind(&form_data(&[("name", "dalmatian")])).is_invalid());
        assert!(form.bind(&form_data(&[("name", "Dog")])).is_invalid());
    }

    #[test]
    fn test_from_config_bad_pattern() {
        let mut config = FormsConfig::default();
        config.validation.name_pattern = Some("([a-z".to_string());
        let err = FormFactory::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid name_pattern"));
    }

    #[test]
    fn test_submit_validates_before_projecting() {
        let form = FormFactory::new().animal_form();

        let map = form
            .submit(&AnimalRecord::with_values("dog", "mans best friend"))
            .unwrap();
        assert_eq!(map.get("name"), Some("dog"));

        let failure = form.submit(&AnimalRecord::with_values("", "x")).unwrap_err();
        assert_eq!(failure.message(), INVALID_NAME_OR_DESCRIPTION);
    }

    #[test]
    fn test_factory_clones_share_predicate() {
        let factory = FormFactory::with_predicate(|name: &str, _: Option<&str>| name.len() > 2);
        let a = factory.animal_form();
        let b = factory.clone().animal_form();
        let record = AnimalRecord::with_values("ox", "");
        assert!(a.validate(&record).is_err());
        assert!(b.validate(&record).is_err());
    }
}
