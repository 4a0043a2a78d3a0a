//! In-memory adapter for UserRepository
//!
//! Backs `/api/users` when no database is configured.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four accounts the demo database ships with
    pub fn seeded() -> Self {
        [
            User::new(1, "j.jameson"),
            User::new(2, "j.walker"),
            User::new(3, "j.daniels"),
            User::new(4, "j.dewar"),
        ]
        .into_iter()
        .fold(Self::new(), Self::with_user)
    }

    pub fn with_user(self, user: User) -> Self {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.id, user);
        self
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::Internal("user store lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().cloned().collect())
    }
}
