use crate::core::domain::entity::user::user::UnvalidatedUserInput;
use serde::{Deserialize, Serialize};

impl From<UserWebInput> for UnvalidatedUserInput {
    fn from(value: UserWebInput) -> Self {
        Self {
            name: value.name,
            dob: value.dob,
        }
    }
}

/// Body of `POST /users` and `PUT /users/:id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserWebInput {
    pub name: String,
    pub dob: String,
}
