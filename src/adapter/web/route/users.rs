use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::warn;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::dto::user_web_input::UserWebInput;
use crate::adapter::web::dto::user_web_output::UserWebOutput;
use crate::adapter::web::error::ApiError;
use crate::adapter::web::handler::users::UserHandler;

fn body(payload: Result<Json<UserWebInput>, JsonRejection>) -> Result<UserWebInput, ApiError> {
    match payload {
        Ok(Json(user)) => Ok(user),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "failed to decode request body");
            Err(ApiError::bad_request(format!(
                "Invalid request body: {}",
                rejection.body_text()
            )))
        }
    }
}

fn user_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "invalid user id");
            Err(ApiError::bad_request("Invalid user ID"))
        }
    }
}

fn handler(state: &AppState) -> UserHandler {
    UserHandler::new(state.user_use_case.clone())
}

pub async fn post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UserWebInput>, JsonRejection>,
) -> Result<(StatusCode, Json<UserWebOutput>), ApiError> {
    let user = body(payload)?;
    handler(&state).create_user(user).await
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<UserWebOutput>, ApiError> {
    let id = user_id(id)?;
    handler(&state).get_user(id).await
}

pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserWebOutput>>, ApiError> {
    handler(&state).list_users().await
}

pub async fn put(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UserWebInput>, JsonRejection>,
) -> Result<Json<UserWebOutput>, ApiError> {
    let id = user_id(id)?;
    let user = body(payload)?;
    handler(&state).update_user(id, user).await
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = user_id(id)?;
    handler(&state).delete_user(id).await
}
