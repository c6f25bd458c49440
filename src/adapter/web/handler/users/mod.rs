use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::adapter::web::dto::user_web_input::UserWebInput;
use crate::adapter::web::dto::user_web_output::UserWebOutput;
use crate::adapter::web::error::ApiError;
use crate::adapter::web::presenter::user::UserPresenter;
use crate::core::port::user::{UserError, UserInputBoundary};

/// Runs one use case call per request and turns the outcome into a response.
/// This is the only layer that logs.
pub struct UserHandler {
    use_case: Arc<dyn UserInputBoundary>,
}

impl UserHandler {
    pub fn new(use_case: Arc<dyn UserInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn create_user(
        &self,
        user: UserWebInput,
    ) -> Result<(StatusCode, Json<UserWebOutput>), ApiError> {
        match self.use_case.create_user(user.into()).await {
            Ok(profile) => {
                info!(id = profile.id, "user created");
                Ok(UserPresenter::created(profile))
            }
            Err(e) => Err(report("create user", &e)),
        }
    }

    pub async fn get_user(&self, id: i32) -> Result<Json<UserWebOutput>, ApiError> {
        self.use_case
            .get_user(id)
            .await
            .map(UserPresenter::found)
            .map_err(|e| report("get user", &e))
    }

    pub async fn list_users(&self) -> Result<Json<Vec<UserWebOutput>>, ApiError> {
        let listing = self
            .use_case
            .list_users()
            .await
            .map_err(|e| report("list users", &e))?;

        for skipped in &listing.skipped {
            warn!(id = skipped.id, reason = %skipped.reason, "user left out of listing");
        }
        info!(
            count = listing.users.len(),
            skipped = listing.skipped.len(),
            "users listed"
        );
        Ok(UserPresenter::listed(listing))
    }

    pub async fn update_user(
        &self,
        id: i32,
        user: UserWebInput,
    ) -> Result<Json<UserWebOutput>, ApiError> {
        self.use_case
            .update_user(id, user.into())
            .await
            .map(UserPresenter::found)
            .map_err(|e| report("update user", &e))
    }

    pub async fn delete_user(&self, id: i32) -> Result<StatusCode, ApiError> {
        self.use_case
            .delete_user(id)
            .await
            .map(|_| UserPresenter::deleted())
            .map_err(|e| report("delete user", &e))
    }
}

fn report(action: &str, error: &UserError) -> ApiError {
    let api_error = UserPresenter::failure(error);
    if api_error.status.is_server_error() {
        error!(action, error = %error, "request failed");
    } else {
        warn!(action, error = %error, status = api_error.status.as_u16(), "request rejected");
    }
    api_error
}
