//! Animal-Forms-Validation Core
//!
//! The validation vocabulary shared by every form in `animal-forms`: the
//! [`Validate`] trait, the [`ValidationFailure`] error, pluggable
//! [`AcceptancePredicate`] strategies and a handful of string validators.

pub mod failure;
pub mod predicate;
pub mod string;

// Re-export all validators
pub use failure::*;
pub use predicate::*;
pub use string::*;

/// Core validation trait that all forms implement
///
/// Validation is evaluated over the whole record at once. `Ok(())` means the
/// record is acceptable; `Err` carries the message to show the user.
pub trait Validate {
    /// Validate the record
    fn validate(&self) -> Result<(), ValidationFailure>;

    /// Shorthand for `validate().is_ok()`
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
