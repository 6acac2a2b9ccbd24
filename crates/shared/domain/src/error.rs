//! Domain-level errors.
//!
//! Validation failures, independent of infrastructure concerns (HTTP, storage).

use serde::Serialize;
use thiserror::Error;

/// Why a single field was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FieldIssue {
    /// Key is not one of the writable fields
    #[error("unknown field")]
    UnknownField,
    /// Required field was not supplied
    #[error("field is required")]
    Missing,
    /// Field was supplied with a non-string value (including null)
    #[error("must be a string")]
    NotAString,
    /// Field was an empty or whitespace-only string
    #[error("must not be empty")]
    Empty,
    /// Field does not look like an email address
    #[error("must be a valid email address")]
    InvalidEmail,
}

/// A rejected field together with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    pub field: String,
    pub reason: FieldIssue,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: FieldIssue) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }

    /// Human readable form, e.g. `unknown field: age`.
    pub fn message(&self) -> String {
        match self.reason {
            FieldIssue::UnknownField => format!("unknown field: {}", self.field),
            reason => format!("{}: {}", self.field, reason),
        }
    }
}

/// Every problem found while validating one input.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[error("{}", join_messages(.0))]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, reason: FieldIssue) {
        self.0.push(FieldError::new(field, reason));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Check whether `field` was rejected for `reason`.
    pub fn contains(&self, field: &str, reason: FieldIssue) -> bool {
        self.0.iter().any(|e| e.field == field && e.reason == reason)
    }

    /// Turn the collected problems into a result.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}
