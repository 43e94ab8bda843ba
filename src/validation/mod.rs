pub mod form;
pub mod validators;

pub use form::{validate_account_form, validate_for_submission};
pub use validators::{
    LengthRule, ValidationError, ValidationResult, combine_validations, format_grouped,
    validate_max_number, validate_min_number, validate_required, validate_string_length,
};
