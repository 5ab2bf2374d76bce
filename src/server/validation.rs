//! Input sanitation run before any store mutation.
//!
//! Controllers hand raw DTO fields to a `Validator`, which trims, bounds and escapes
//! text and parses identifiers. Every failing field is collected so that a single
//! response can report all of them. Only the first failure of a field is kept.

use uuid::Uuid;

use crate::{model::api::FieldErrorDto, server::error::AppError};

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> FieldErrorDto {
        FieldErrorDto {
            field: self.field,
            message: self.message,
        }
    }
}

/// Constraints for a trimmed, escaped, length-bounded text field.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    /// Message reported when the field is missing or blank.
    pub required: &'static str,
    /// Inclusive character bounds of the trimmed value.
    pub min: usize,
    pub max: usize,
    /// Message reported when the trimmed value is out of bounds.
    pub length: &'static str,
}

pub const COURSE_TYPE_NAME: TextRule = TextRule {
    required: "Course type name is required",
    min: 2,
    max: 100,
    length: "Name must be between 2 and 100 characters",
};

pub const UNIVERSITY_NAME: TextRule = TextRule {
    required: "University name is required",
    min: 2,
    max: 100,
    length: "Name must be between 2 and 100 characters",
};

pub const COURSE_NAME: TextRule = TextRule {
    required: "Course name is required",
    min: 3,
    max: 200,
    length: "Name must be between 3 and 200 characters",
};

/// Collects field violations for one request.
///
/// Accessors return a placeholder (empty string, nil UUID) for a failing field; the
/// placeholder is never observed because `finish` then returns an error.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a required text field.
    ///
    /// # Arguments
    /// - `field` - Field name reported on failure
    /// - `value` - Raw value from the request, if present
    /// - `rule` - Requirement and length constraints
    ///
    /// # Returns
    /// - The trimmed and HTML-escaped value
    pub fn text(&mut self, field: &str, value: Option<&str>, rule: &TextRule) -> String {
        let trimmed = value.map(str::trim).unwrap_or_default();

        if trimmed.is_empty() {
            self.errors.push(FieldError::new(field, rule.required));
            return String::new();
        }

        let length = trimmed.chars().count();
        if length < rule.min || length > rule.max {
            self.errors.push(FieldError::new(field, rule.length));
            return String::new();
        }

        escape_html(trimmed)
    }

    /// Validates a required identifier field.
    ///
    /// # Arguments
    /// - `field` - Field name reported on failure
    /// - `value` - Raw value from the request, if present
    /// - `required` - Message reported when the field is missing or blank
    /// - `invalid` - Message reported when the value is not a well-formed ID
    pub fn identifier(
        &mut self,
        field: &str,
        value: Option<&str>,
        required: &str,
        invalid: &str,
    ) -> Uuid {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => {
                self.errors.push(FieldError::new(field, required));
                Uuid::nil()
            }
            Some(raw) => Uuid::parse_str(raw).unwrap_or_else(|_| {
                self.errors.push(FieldError::new(field, invalid));
                Uuid::nil()
            }),
        }
    }

    /// Ends validation.
    ///
    /// # Returns
    /// - `Ok(())` - Every field passed
    /// - `Err(AppError::Validation)` - One entry per failing field, in check order
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

/// Replaces HTML-significant characters with their entities.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
