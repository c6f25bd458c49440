pub mod user;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::domain::repository::RepositoryError;

/// A row of the `users` table. `dob` is kept as the stored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub dob: String,
}

/// A user as handed back to callers, with the derived age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub age: i32,
}

/// Storage for users. Every method is one statement; none of them log.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a row and returns the id the store assigned to it.
    async fn create(&self, name: &str, dob: &str) -> Result<i32, RepositoryError>;

    async fn get_by_id(&self, id: i32) -> Result<User, RepositoryError>;

    /// All rows, ascending by id.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Succeeds even when no row has `id`.
    async fn update(&self, id: i32, name: &str, dob: &str) -> Result<(), RepositoryError>;

    /// Succeeds even when no row has `id`.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
