//! Typed field-level validation results.
//!
//! Form input is checked with the `validator` crate at the API/web boundary.
//! Its dynamic error tree is folded into [`FieldErrors`]: an ordered map from
//! field name to the [`Violation`]s found on that field.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// A single constraint a field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooLong { max: u64 },
    InvalidUrl,
    InvalidEmail,
    InvalidChoice,
    /// The value does not match the field's pattern.
    InvalidFormat,
}

impl Violation {
    /// Human readable message shown next to the field.
    pub fn message(&self) -> String {
        match self {
            Violation::Required => "This field is required.".to_string(),
            Violation::TooLong { max } => {
                format!("Ensure this value has at most {max} characters.")
            }
            Violation::InvalidUrl => "Enter a valid URL.".to_string(),
            Violation::InvalidEmail => "Enter a valid email address.".to_string(),
            Violation::InvalidChoice => {
                "Select a valid choice. That choice is not one of the available choices."
                    .to_string()
            }
            Violation::InvalidFormat => "Enter a valid value.".to_string(),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Required => "required",
            Violation::TooLong { .. } => "too_long",
            Violation::InvalidUrl => "invalid_url",
            Violation::InvalidEmail => "invalid_email",
            Violation::InvalidChoice => "invalid_choice",
            Violation::InvalidFormat => "invalid",
        }
    }

    fn from_validator(error: &ValidationError) -> Self {
        match &*error.code {
            "required" => Violation::Required,
            "url" | "link" => Violation::InvalidUrl,
            "email" => Violation::InvalidEmail,
            "regex" => Violation::InvalidFormat,
            "length" => Self::from_length(error),
            _ => Violation::InvalidChoice,
        }
    }

    /// A failed `length` check is `TooLong` only when the value exceeds `max`;
    /// falling short of `min` means the field was left empty.
    fn from_length(error: &ValidationError) -> Self {
        let param = |name: &str| error.params.get(name);
        let max = param("max").and_then(|v| v.as_u64());
        let len = param("value")
            .and_then(|v| v.as_str())
            .map(|v| v.chars().count() as u64);

        match (len, max) {
            (Some(len), Some(max)) if len > max => Violation::TooLong { max },
            (Some(_), _) => Violation::Required,
            (None, Some(max)) if param("min").is_none() => Violation::TooLong { max },
            (None, _) => Violation::Required,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Violation", 2)?;
        s.serialize_field("code", self.code())?;
        s.serialize_field("message", &self.message())?;
        s.end()
    }
}

/// Field name to violations, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<Violation>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, violation: Violation) {
        self.0.entry(field.into()).or_default().push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[Violation]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Field names that failed, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Messages for a field joined by a space, or empty when the field passed.
    pub fn message_for(&self, field: &str) -> String {
        self.get(field)
            .map(|violations| {
                violations
                    .iter()
                    .map(Violation::message)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// Merges another set of errors into this one.
    pub fn extend(&mut self, other: FieldErrors) {
        for (field, violations) in other.0 {
            self.0.entry(field).or_default().extend(violations);
        }
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, kind) in errors.into_errors() {
            if let ValidationErrorsKind::Field(list) = kind {
                for error in &list {
                    out.add(field.to_string(), Violation::from_validator(error));
                }
            }
        }
        out
    }
}
