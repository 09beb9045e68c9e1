use super::email::is_valid_email;
use super::errors::Errors;
use super::source::FormSource;
use super::values::Values;

const BLANK_MESSAGE: &str = "This field cannot be blank";
const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

/// Validates one request's submitted form data.
///
/// Rules record at most one message per field; the first failure wins.
#[derive(Debug, Clone, Default)]
pub struct Form {
    values: Values,
    pub errors: Errors,
}

impl Form {
    pub fn new(values: impl Into<Values>) -> Self {
        Self {
            values: values.into(),
            errors: Errors::new(),
        }
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    /// First submitted value for `field`, or `""`.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field)
    }

    /// `true` when no rule has recorded an error.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Flags every field whose first value is missing or whitespace only.
    pub fn required(&mut self, fields: &[&str]) {
        for &field in fields {
            if self.values.get(field).trim().is_empty() {
                self.record(field, "required", BLANK_MESSAGE);
            }
        }
    }

    /// Whether `request` carries a non-blank value for `field`. Records nothing.
    pub fn has(&self, field: &str, request: &impl FormSource) -> bool {
        request
            .form_value(field)
            .is_some_and(|value| !value.trim().is_empty())
    }

    /// Checks that `field` is at least `min` characters long, without trimming.
    pub fn min_length(&mut self, field: &str, min: usize) -> bool {
        if self.values.get(field).chars().count() < min {
            let message = format!("This field must be at least {} characters long", min);
            self.record(field, "min_length", message);
            return false;
        }
        true
    }

    pub fn is_email(&mut self, field: &str) -> bool {
        if !is_valid_email(self.values.get(field)) {
            self.record(field, "is_email", INVALID_EMAIL_MESSAGE);
            return false;
        }
        true
    }

    fn record(&mut self, field: &str, rule: &'static str, message: impl Into<String>) {
        if self.errors.add(field, message) {
            tracing::debug!(field, rule, "form field failed validation");
        }
    }
}

impl From<Values> for Form {
    fn from(values: Values) -> Self {
        Form::new(values)
    }
}
