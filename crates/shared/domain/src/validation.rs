//! Validation of untrusted user input.
//!
//! Request bodies arrive as loosely-typed JSON objects. The functions here
//! check them field by field and either produce strongly-typed parameters or
//! a [`ValidationErrors`] listing every problem found.

use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::constants::{
    is_writable_field, EMAIL_DOMAIN_SEPARATOR, FIELD_EMAIL, FIELD_NAME, MIN_NAME_LENGTH,
};
use crate::error::{FieldIssue, ValidationErrors};
use crate::user::{CreateUser, UpdateUser};

/// Untyped input as decoded from a JSON object body
pub type Input = Map<String, Value>;

/// Parameters that can be built from an untyped input map.
pub trait FromInput: Sized {
    fn from_input(input: &Input) -> Result<Self, ValidationErrors>;
}

impl FromInput for CreateUser {
    fn from_input(input: &Input) -> Result<Self, ValidationErrors> {
        parse_creation(input)
    }
}

impl FromInput for UpdateUser {
    fn from_input(input: &Input) -> Result<Self, ValidationErrors> {
        parse_update(input)
    }
}

/// Validate a creation request. `name` and `email` are both required.
pub fn parse_creation(input: &Input) -> Result<CreateUser, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let fields = parse_fields(input, &mut errors);

    if !input.contains_key(FIELD_NAME) {
        errors.add(FIELD_NAME, FieldIssue::Missing);
    }
    if !input.contains_key(FIELD_EMAIL) {
        errors.add(FIELD_EMAIL, FieldIssue::Missing);
    }

    match fields {
        UpdateUser {
            name: Some(name),
            email: Some(email),
        } if errors.is_empty() => Ok(CreateUser { name, email }),
        _ => Err(errors),
    }
}

/// Validate a partial update. Every field is optional; `id` is rejected.
pub fn parse_update(input: &Input) -> Result<UpdateUser, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let fields = parse_fields(input, &mut errors);
    errors.into_result(|| fields)
}

/// Check every present key, recording problems and keeping the valid values.
fn parse_fields(input: &Input, errors: &mut ValidationErrors) -> UpdateUser {
    let mut fields = UpdateUser::default();

    for (key, value) in input {
        if !is_writable_field(key) {
            errors.add(key.as_str(), FieldIssue::UnknownField);
            continue;
        }

        let checked = if key == FIELD_NAME {
            check_name(value)
        } else {
            check_email(value)
        };

        match checked {
            Ok(text) if key == FIELD_NAME => fields.name = Some(text),
            Ok(text) => fields.email = Some(text),
            Err(issue) => errors.add(key.as_str(), issue),
        }
    }

    fields
}

fn check_name(value: &Value) -> Result<String, FieldIssue> {
    let name = value.as_str().ok_or(FieldIssue::NotAString)?;
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(FieldIssue::Empty);
    }
    Ok(name.to_string())
}

fn check_email(value: &Value) -> Result<String, FieldIssue> {
    let email = value.as_str().ok_or(FieldIssue::NotAString)?;
    if email.trim().is_empty() {
        return Err(FieldIssue::Empty);
    }
    if !is_valid_email(email) {
        return Err(FieldIssue::InvalidEmail);
    }
    Ok(email.to_string())
}

/// Basic email syntax: `local@domain` where the domain contains a dot.
///
/// `validate_email` already rejects an empty local part.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }

    match email.rsplit_once(EMAIL_DOMAIN_SEPARATOR) {
        Some((_, domain)) => {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
