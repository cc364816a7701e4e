//! Request body validation.

use std::collections::BTreeMap;

use crate::errors::ApiError;

/// Field name to message, in field order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub(crate) fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Rejects `value` when it is empty or whitespace.
    pub(crate) fn require_non_blank(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    /// Rejects a present phone number that is not exactly ten ASCII digits.
    pub(crate) fn check_phone_number(&mut self, field: &str, value: Option<&str>) {
        if let Some(number) = value
            && !is_phone_number(number)
        {
            self.add(field, "Number should contain 10 digits.");
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::invalid_fields(errors.0)
    }
}

fn is_phone_number(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Field-level checks for a request body.
pub(crate) trait Validate: Sized {
    fn collect_errors(&self, errors: &mut FieldErrors);

    /// # Errors
    ///
    /// Returns a 400 [`ApiError`] listing every rejected field.
    fn validated(self) -> Result<Self, ApiError> {
        let mut errors = FieldErrors::default();

        self.collect_errors(&mut errors);

        errors.into_result()?;

        Ok(self)
    }
}
