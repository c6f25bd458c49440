use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::PgPool;

use crate::core::domain::entity::user::{User, UserRepository};
use crate::core::domain::repository::RepositoryError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    name: String,
    dob: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            dob: row.dob,
        }
    }
}

/// `UserRepository` over the `users` table. Each call checks a connection
/// out of the pool for a single statement.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, name: &str, dob: &str) -> Result<i32, RepositoryError> {
        sqlx::query_scalar::<_, i32>("INSERT INTO users (name, dob) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(dob)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::database)
    }

    async fn get_by_id(&self, id: i32) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, UserRow>("SELECT id, name, dob FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::database)?
            .map(User::from)
            .ok_or_else(|| RepositoryError::user_not_found(id))
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        sqlx::query_as::<_, UserRow>("SELECT id, name, dob FROM users ORDER BY id ASC")
            .fetch(&self.pool)
            .map_ok(User::from)
            .try_collect()
            .await
            .map_err(RepositoryError::database)
    }

    async fn update(&self, id: i32, name: &str, dob: &str) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE users SET name = $1, dob = $2 WHERE id = $3")
            .bind(name)
            .bind(dob)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database)?;
        Ok(())
    }
}
