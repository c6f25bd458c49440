use std::sync::Arc;

use crate::core::port::user::UserInputBoundary;

pub struct AppState {
    pub user_use_case: Arc<dyn UserInputBoundary>,
}

impl AppState {
    pub fn new(user_use_case: Arc<dyn UserInputBoundary>) -> Self {
        Self { user_use_case }
    }
}
