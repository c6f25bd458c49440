use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{info, warn};

use crate::adapter::config::{AppConfig, DatabaseConfig};
use crate::adapter::store::pg::user::PgUserRepository;
use crate::adapter::web::app_state::AppState;
use crate::core::use_case::user::UserUseCase;
use crate::error::ApplicationError;

pub struct AppInitializer;

impl AppInitializer {
    pub async fn initialize(config: &AppConfig) -> Result<Arc<AppState>, ApplicationError> {
        let pool = Self::connect(&config.database).await?;
        Ok(Self::wire(pool))
    }

    /// Builds the state around a pool the caller already established.
    pub fn wire(pool: PgPool) -> Arc<AppState> {
        let user_repository = Arc::new(PgUserRepository::new(pool));
        let user_use_case = Arc::new(UserUseCase::new(user_repository));
        Arc::new(AppState::new(user_use_case))
    }

    /// Opens the pool lazily, then pings until the database answers or the
    /// retry budget is spent.
    async fn connect(config: &DatabaseConfig) -> Result<PgPool, ApplicationError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .max_lifetime(config.max_lifetime)
            .connect_lazy(&config.db_url())
            .map_err(|e| ApplicationError::DatabaseInitError(e.to_string()))?;

        info!(host = %config.host, database = %config.name, "connecting to database");

        let attempts = config.connect_retries.max(1);
        let mut last_error = String::new();
        for attempt in 1..=attempts {
            match sqlx::query("SELECT 1").execute(&pool).await {
                Ok(_) => {
                    info!("database connected");
                    return Ok(pool);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "database ping failed");
                    last_error = e.to_string();
                    if attempt < attempts {
                        tokio::time::sleep(config.retry_delay).await;
                    }
                }
            }
        }

        Err(ApplicationError::DatabaseInitError(format!(
            "no answer after {attempts} attempts: {last_error}"
        )))
    }
}
