//! # Error Types
//!
//! A [`SchemaError`] is a single failed constraint. Request rules attach it to
//! the field it came from ([`FieldError`]) and accumulate every failing field
//! of one request part into [`FieldErrors`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single constraint violation produced by a parse function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SchemaError {
    message: String,
}

impl SchemaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attach this failure to a request field.
    pub fn at(self, field: impl Into<String>) -> FieldError {
        FieldError {
            field: field.into(),
            message: self.message,
        }
    }
}

/// A constraint violation bound to the request field that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Name of the failing field as it appears in the request.
    pub field: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

/// All field failures collected while validating one request part.
///
/// Serializes as `{"issues": [{"field": ..., "message": ...}, ...]}`.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("invalid input: {}", summarize(.issues))]
pub struct FieldErrors {
    pub issues: Vec<FieldError>,
}

fn summarize(issues: &[FieldError]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.issues.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether any issue refers to `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    /// Record the outcome of parsing one field, returning the value on success.
    ///
    /// Lets a rule parse every field before deciding whether to reject, so
    /// the caller sees all failures at once.
    pub fn collect<T>(&mut self, field: &str, result: Result<T, SchemaError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err.at(field));
                None
            }
        }
    }

    /// Fold in the issues of a nested validation, returning its value on success.
    pub fn absorb<T>(&mut self, result: Result<T, FieldErrors>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(nested) => {
                self.issues.extend(nested.issues);
                None
            }
        }
    }

    /// `Ok(value)` when no issues were recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self {
            issues: vec![error],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_attaches_field() {
        let err = SchemaError::new("Must be a numeric chain ID").at("chainId");
        assert_eq!(err.field, "chainId");
        assert_eq!(err.message, "Must be a numeric chain ID");
        assert_eq!(err.to_string(), "chainId: Must be a numeric chain ID");
    }

    #[test]
    fn collect_records_failures_and_passes_values() {
        let mut errors = FieldErrors::new();
        let ok: Option<u8> = errors.collect("a", Ok(1));
        let bad: Option<u8> = errors.collect("b", Err(SchemaError::new("nope")));
        assert_eq!(ok, Some(1));
        assert_eq!(bad, None);
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("b"));
        assert!(!errors.has_field("a"));
    }

    #[test]
    fn into_result_only_builds_value_when_clean() {
        assert_eq!(FieldErrors::new().into_result(|| 7), Ok(7));

        let errors = FieldErrors::from(SchemaError::new("x").at("name"));
        assert!(errors.into_result(|| 7).is_err());
    }

    #[test]
    fn serializes_as_issue_list() {
        let errors = FieldErrors::from(SchemaError::new("Name must not be empty").at("name"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"issues": [{"field": "name", "message": "Name must not be empty"}]})
        );
    }

    #[test]
    fn display_joins_issues() {
        let mut errors = FieldErrors::new();
        errors.push(SchemaError::new("one").at("a"));
        errors.push(SchemaError::new("two").at("b"));
        assert_eq!(errors.to_string(), "invalid input: a: one; b: two");
    }
}
