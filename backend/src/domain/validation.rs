//! Field-level validation of raw JSON input.
//!
//! Validators collect every failing field before giving up, so a payload with
//! two bad fields reports both. The collected [`ValidationErrors`] turns into
//! a single [`Error`] whose details list one entry per field.

use serde::Serialize;
use serde_json::{Map, Value, json};

use super::Error;

/// Machine-readable reason a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    /// The body is not a JSON object.
    InvalidBody,
    /// The field is absent or `null` where a value is required.
    MissingField,
    /// The field holds the wrong JSON type.
    InvalidType,
    /// The field is an empty string.
    EmptyValue,
    /// The status label is not one of the permitted values.
    InvalidStatus,
}

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    field: String,
    code: FieldErrorCode,
    message: String,
}

impl FieldError {
    /// Build a field error.
    pub fn new(field: impl Into<String>, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    /// Path of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Reason code.
    #[must_use]
    pub const fn code(&self) -> FieldErrorCode {
        self.code
    }

    /// Human-readable reason.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Non-empty collection of field errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a failing field.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// True when nothing has failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failing fields in the order they were checked.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// True when `field` has at least one recorded error.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|err| err.field == field)
    }

    /// `Ok(value)` when nothing failed, otherwise `Err(self)`.
    ///
    /// # Errors
    /// Returns the collected errors when at least one field failed.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }

    /// Convert into the domain error returned to callers.
    #[must_use]
    pub fn into_error(self, message: &str) -> Error {
        Error::invalid_request(message).with_details(json!({ "errors": self.0 }))
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Borrow `body` as a JSON object or report an `invalid_body` error.
pub(crate) fn object_body(body: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    body.as_object().ok_or_else(|| {
        FieldError::new(
            "body",
            FieldErrorCode::InvalidBody,
            "request body must be a JSON object",
        )
        .into()
    })
}

/// Read a required non-empty string field, recording any failure.
pub(crate) fn required_text(
    body: &Map<String, Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(
                field,
                FieldErrorCode::MissingField,
                format!("{field} is required"),
            ));
            None
        }
        Some(Value::String(text)) if text.is_empty() => {
            errors.push(FieldError::new(
                field,
                FieldErrorCode::EmptyValue,
                format!("{field} must not be empty"),
            ));
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            errors.push(FieldError::new(
                field,
                FieldErrorCode::InvalidType,
                format!("{field} must be a string"),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn check(body: &Value) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if let Ok(object) = object_body(body) {
            let _ = required_text(object, "artist", &mut errors);
        }
        errors
    }

    #[rstest]
    #[case(json!({}), FieldErrorCode::MissingField)]
    #[case(json!({ "artist": null }), FieldErrorCode::MissingField)]
    #[case(json!({ "artist": "" }), FieldErrorCode::EmptyValue)]
    #[case(json!({ "artist": 42 }), FieldErrorCode::InvalidType)]
    fn required_text_reports_reason(#[case] body: Value, #[case] expected: FieldErrorCode) {
        let errors = check(&body);
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.errors()[0].code(), expected);
        assert_eq!(errors.errors()[0].field(), "artist");
    }

    #[rstest]
    fn required_text_keeps_whitespace_verbatim() {
        let body = json!({ "artist": "  Björk " });
        let mut errors = ValidationErrors::new();
        let object = object_body(&body).expect("object body");
        let value = required_text(object, "artist", &mut errors);
        assert_eq!(value.as_deref(), Some("  Björk "));
        assert!(errors.is_empty());
    }

    #[rstest]
    #[case(json!([]))]
    #[case(json!("artist"))]
    #[case(Value::Null)]
    fn non_object_bodies_are_rejected(#[case] body: Value) {
        let errors = object_body(&body).expect_err("body must be rejected");
        assert!(errors.has_field("body"));
    }

    #[rstest]
    fn into_error_lists_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("artist", FieldErrorCode::MissingField, "artist is required"));
        errors.push(FieldError::new("title", FieldErrorCode::EmptyValue, "title must not be empty"));

        let err = errors.into_error("Invalid request data");

        assert_eq!(err.message(), "Invalid request data");
        let details = err.details().expect("details present");
        assert_eq!(
            details,
            &json!({
                "errors": [
                    { "field": "artist", "code": "missing_field", "message": "artist is required" },
                    { "field": "title", "code": "empty_value", "message": "title must not be empty" },
                ]
            })
        );
    }
}
