//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly generated id
    pub fn new(params: CreateUser) -> Self {
        Self::with_id(Uuid::new_v4(), params)
    }

    /// Create a new user with the given id
    pub fn with_id(id: Uuid, params: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: params.name,
            email: params.email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Absent fields keep their current value.
    pub fn apply(&mut self, changes: UpdateUser) {
        if changes.is_empty() {
            return;
        }
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        self.updated_at = Utc::now();
    }
}

/// Validated user creation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "User_A"))]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "a@example.com"))]
    pub email: String,
}

/// Validated partial update. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUser {
    /// New display name
    #[cfg_attr(feature = "openapi", schema(example = "Renamed_User_A"))]
    pub name: Option<String>,
    /// New email address
    #[cfg_attr(feature = "openapi", schema(example = "a2@example.com"))]
    pub email: Option<String>,
}

impl UpdateUser {
    /// True for the no-op update
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// User response (the only shape that leaves the service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
