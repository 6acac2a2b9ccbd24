//! In-memory user repository.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use domain::{CreateUser, UpdateUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups by unknown id return `None`; none of the operations can fail.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> Option<User>;

    /// Create a new user with a generated id
    async fn create(&self, params: CreateUser) -> User;

    /// Apply the present fields of `changes`, returning the updated user
    async fn update(&self, id: Uuid, changes: UpdateUser) -> Option<User>;

    /// Remove a user, returning the removed record
    async fn delete(&self, id: Uuid) -> Option<User>;

    /// Remove every user, returning how many were removed
    async fn clear(&self) -> usize;

    /// List all users in insertion order
    async fn list(&self) -> Vec<User>;

    /// Number of stored users
    async fn count(&self) -> usize;
}

/// Records keyed by id plus the order they were inserted in.
#[derive(Default)]
struct Records {
    users: HashMap<Uuid, User>,
    order: Vec<Uuid>,
}

/// Concrete in-memory implementation of UserRepository.
///
/// One lock guards the whole map, so every operation is atomic with respect to
/// the others. The guard is never held across an await point.
#[derive(Default)]
pub struct UserStore {
    records: RwLock<Records>,
}

impl UserStore {
    /// Create an empty repository instance
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.records.read().users.get(&id).cloned()
    }

    async fn create(&self, params: CreateUser) -> User {
        let user = User::new(params);

        let mut records = self.records.write();
        // v4 ids are 122 random bits; a collision is not retried
        records.order.push(user.id);
        records.users.insert(user.id, user.clone());

        user
    }

    async fn update(&self, id: Uuid, changes: UpdateUser) -> Option<User> {
        let mut records = self.records.write();
        let user = records.users.get_mut(&id)?;
        user.apply(changes);
        Some(user.clone())
    }

    async fn delete(&self, id: Uuid) -> Option<User> {
        let mut records = self.records.write();
        let user = records.users.remove(&id)?;
        records.order.retain(|existing| *existing != id);
        Some(user)
    }

    async fn clear(&self) -> usize {
        let mut records = self.records.write();
        let removed = records.users.len();
        records.users.clear();
        records.order.clear();
        removed
    }

    async fn list(&self) -> Vec<User> {
        let records = self.records.read();
        records
            .order
            .iter()
            .filter_map(|id| records.users.get(id))
            .cloned()
            .collect()
    }

    async fn count(&self) -> usize {
        self.records.read().users.len()
    }
}
