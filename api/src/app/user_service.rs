//! User service
//!
//! Looks users up through whichever `UserRepository` the server was wired with.

use std::sync::Arc;

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

pub struct UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Get a user, failing with `NotFound` when the repository has none
    pub async fn get_user_by_id(&self, id: UserId) -> Result<User, DomainError> {
        self.users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User {} not found", id)))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.users.find_all().await
    }
}
