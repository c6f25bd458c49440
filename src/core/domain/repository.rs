use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {entity_type} - {details}")]
    NotFound {
        entity_type: String,
        details: String,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn user_not_found(id: i32) -> Self {
        RepositoryError::NotFound {
            entity_type: "User".to_string(),
            details: format!("id: {}", id),
        }
    }

    pub fn database(error: impl std::fmt::Display) -> Self {
        RepositoryError::DatabaseError(error.to_string())
    }
}
