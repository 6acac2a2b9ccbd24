//! User service - Handles user-related business logic.
//!
//! Turns the repository's "absent" results into `NotFound` errors and logs
//! every mutation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{CreateUser, UpdateUser, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users in creation order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a new user from validated parameters
    async fn create_user(&self, params: CreateUser) -> AppResult<User>;

    /// Apply a validated partial update
    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User>;

    /// Delete user, returning the removed record
    async fn delete_user(&self, id: Uuid) -> AppResult<User>;

    /// Remove every user, returning how many were removed
    async fn clear_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        debug!(user_id = %id, "Fetching user");
        self.repo.find_by_id(id).await.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.repo.list().await;
        debug!(count = users.len(), "Listing users");
        Ok(users)
    }

    async fn create_user(&self, params: CreateUser) -> AppResult<User> {
        let user = self.repo.create(params).await;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User> {
        let user = self.repo.update(id, changes).await.ok_or_not_found()?;
        info!(user_id = %id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<User> {
        let user = self.repo.delete(id).await.ok_or_not_found()?;
        info!(user_id = %id, "User deleted");
        Ok(user)
    }

    async fn clear_users(&self) -> AppResult<usize> {
        let removed = self.repo.clear().await;
        info!(removed, "All users removed");
        Ok(removed)
    }
}
