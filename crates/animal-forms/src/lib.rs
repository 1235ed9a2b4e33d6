//! # animal-forms
//!
//! Form binding and validation for animal records: a required `name` and a
//! free-form `description`.
//!
//! ## Quick Start
//!
//! ```rust
//! use animal_forms::{AnimalRecord, FormFactory};
//!
//! let factory = FormFactory::new();
//! let form = factory.animal_form();
//!
//! let mut record = AnimalRecord::new();
//! record.set_name("dog");
//! record.set_description("mans best friend");
//!
//! let data = form.submit(&record).expect("dog is a valid name");
//! assert_eq!(data.get("name"), Some("dog"));
//! ```
//!
//! ## Architecture
//!
//! - [`AnimalRecord`] - the record, its setters and the field map projection
//! - [`FormFactory`] / [`AnimalForm`] - bind submitted [`FormData`] and validate it
//! - [`validation`] - the `Validate` trait, failures and acceptance predicates
//! - [`FormsConfig`] - TOML configuration, [`logging`] - tracing setup

pub mod binding;
pub mod config;
pub mod field_map;
pub mod form;
pub mod form_context;
pub mod form_data;
pub mod logging;
pub mod record;

pub use binding::{bind, BindError};
pub use config::{FormsConfig, LoggingConfig, ValidationConfig};
pub use field_map::FieldMap;
pub use form::{AnimalForm, FormFactory, FormResult};
pub use form_context::FormContext;
pub use form_data::FormData;
pub use record::AnimalRecord;

// Re-export the validation crate for predicates and the Validate trait
pub use animal_forms_validation as validation;
pub use animal_forms_validation::{AcceptancePredicate, Validate, ValidationFailure};
