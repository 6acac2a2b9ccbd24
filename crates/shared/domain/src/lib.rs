//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity, its parameter sets and the validation that produces them.

pub mod constants;
pub mod error;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{FieldError, FieldIssue, ValidationErrors};
pub use user::{CreateUser, UpdateUser, User, UserResponse};
pub use validation::{is_valid_email, parse_creation, parse_update, FromInput, Input};
