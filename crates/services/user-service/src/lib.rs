//! User Service Library
//!
//! This crate owns the user records: an in-memory repository and the service
//! layer the HTTP gateway calls into.

pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Build a user service over a fresh, empty in-memory store.
pub fn in_memory() -> Arc<dyn UserService> {
    Arc::new(UserManager::new(Arc::new(UserStore::new())))
}
