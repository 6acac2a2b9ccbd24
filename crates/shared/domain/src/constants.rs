//! Domain-level constants.
//!
//! These constants define the user resource's field set and validation rules.

// =============================================================================
// User Fields
// =============================================================================

/// Display name field
pub const FIELD_NAME: &str = "name";

/// Email address field
pub const FIELD_EMAIL: &str = "email";

/// Fields a client may set on a user
pub const WRITABLE_FIELDS: &[&str] = &[FIELD_NAME, FIELD_EMAIL];

/// Check if a field may be supplied by a client
pub fn is_writable_field(field: &str) -> bool {
    WRITABLE_FIELDS.contains(&field)
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length requirement (counted after trimming whitespace)
pub const MIN_NAME_LENGTH: usize = 1;

/// Separator between the local part and the domain of an email address
pub const EMAIL_DOMAIN_SEPARATOR: char = '@';

// =============================================================================
// Service
// =============================================================================

/// Name reported by the liveness check
pub const SERVICE_NAME: &str = "user-service";
