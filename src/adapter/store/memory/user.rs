use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::core::domain::entity::user::{User, UserRepository};
use crate::core::domain::repository::RepositoryError;

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, User>,
}

/// Process-local `UserRepository` with auto-increment ids starting at 1.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, name: &str, dob: &str) -> Result<i32, RepositoryError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(
            id,
            User {
                id,
                name: name.to_string(),
                dob: dob.to_string(),
            },
        );
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> Result<User, RepositoryError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::user_not_found(id))
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, name: &str, dob: &str) -> Result<(), RepositoryError> {
        if let Some(user) = self.table.write().await.rows.get_mut(&id) {
            user.name = name.to_string();
            user.dob = dob.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}
