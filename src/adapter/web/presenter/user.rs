use axum::http::StatusCode;
use axum::Json;

use crate::adapter::web::dto::user_web_output::UserWebOutput;
use crate::adapter::web::error::ApiError;
use crate::core::domain::entity::user::UserProfile;
use crate::core::port::user::{UserError, UserListing};

pub struct UserPresenter;

impl UserPresenter {
    pub(crate) fn created(profile: UserProfile) -> (StatusCode, Json<UserWebOutput>) {
        (StatusCode::CREATED, Json(profile.into()))
    }

    pub(crate) fn found(profile: UserProfile) -> Json<UserWebOutput> {
        Json(profile.into())
    }

    pub(crate) fn listed(listing: UserListing) -> Json<Vec<UserWebOutput>> {
        Json(listing.users.into_iter().map(UserWebOutput::from).collect())
    }

    pub(crate) fn deleted() -> StatusCode {
        StatusCode::NO_CONTENT
    }

    pub(crate) fn failure(error: &UserError) -> ApiError {
        let status = match error {
            UserError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            UserError::NotFound { .. } => StatusCode::NOT_FOUND,
            UserError::Storage(_) | UserError::UnreadableDob { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ApiError::new(status, error.to_string())
    }
}
