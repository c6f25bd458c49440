use serde::{Deserialize, Serialize};

use crate::core::domain::birth_date::format_date;
use crate::core::domain::entity::user::UserProfile;

impl From<UserProfile> for UserWebOutput {
    fn from(value: UserProfile) -> Self {
        Self {
            id: value.id,
            name: value.name,
            dob: format_date(value.dob),
            age: value.age,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserWebOutput {
    pub id: i32,
    pub name: String,
    pub dob: String,
    pub age: i32,
}
