use crate::account::{AccountField, FieldErrorMap};

/// Field errors of the current form session plus the "has attempted submit"
/// flag. Errors only appear after a submit, and are only pruned per field once
/// a submit has happened.
#[derive(Debug, Default, Clone)]
pub struct ValidationState {
    errors: FieldErrorMap,
    has_submitted: bool,
}

impl ValidationState {
    pub fn mark_as_submitted(&mut self) {
        self.has_submitted = true;
    }

    pub fn set_validation_errors(&mut self, errors: FieldErrorMap) {
        self.errors = errors;
    }

    pub fn clear_all_errors(&mut self) {
        self.errors.clear();
    }

    /// No-op until the first submit attempt.
    pub fn clear_field_error(&mut self, field: AccountField) -> bool {
        if !self.has_submitted {
            return false;
        }
        self.errors.shift_remove(&field).is_some()
    }

    pub fn error(&self, field: AccountField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrorMap {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_submitted(&self) -> bool {
        self.has_submitted
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
