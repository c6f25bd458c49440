use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::birth_date::DateParseError;
use crate::core::domain::entity::user::user::{UnvalidatedUserInput, UserValidationError};
use crate::core::domain::entity::user::UserProfile;
use crate::core::domain::repository::RepositoryError;

#[async_trait]
pub trait UserInputBoundary: Send + Sync {
    async fn create_user(&self, input: UnvalidatedUserInput) -> Result<UserProfile, UserError>;

    async fn get_user(&self, id: i32) -> Result<UserProfile, UserError>;

    async fn list_users(&self) -> Result<UserListing, UserError>;

    async fn update_user(
        &self,
        id: i32,
        input: UnvalidatedUserInput,
    ) -> Result<UserProfile, UserError>;

    async fn delete_user(&self, id: i32) -> Result<(), UserError>;
}

/// Result of listing: the readable users, plus the rows left out because
/// their stored dob could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListing {
    pub users: Vec<UserProfile>,
    pub skipped: Vec<SkippedUser>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUser {
    pub id: i32,
    pub reason: DateParseError,
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    InvalidInput(#[from] UserValidationError),

    #[error("user not found: id {id}")]
    NotFound { id: i32 },

    #[error(transparent)]
    Storage(RepositoryError),

    #[error("stored dob for user {id} is unreadable: {source}")]
    UnreadableDob { id: i32, source: DateParseError },
}

impl UserError {
    pub(crate) fn from_repository(id: i32, error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { .. } => UserError::NotFound { id },
            other => UserError::Storage(other),
        }
    }
}

impl From<RepositoryError> for UserError {
    fn from(value: RepositoryError) -> Self {
        UserError::Storage(value)
    }
}
