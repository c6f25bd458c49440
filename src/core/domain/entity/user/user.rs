use chrono::NaiveDate;
use thiserror::Error;

use crate::core::domain::birth_date::{format_date, parse_date, DateParseError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error(transparent)]
    InvalidDob(#[from] DateParseError),
}

/// Name and dob exactly as the client sent them.
#[derive(Debug, Clone)]
pub struct UnvalidatedUserInput {
    pub name: String,
    pub dob: String,
}

/// Input that passed validation; `dob` is already a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub dob: NaiveDate,
}

impl UserInput {
    /// The dob as it is written to storage.
    pub fn stored_dob(&self) -> String {
        format_date(self.dob)
    }
}

impl TryFrom<UnvalidatedUserInput> for UserInput {
    type Error = UserValidationError;

    fn try_from(value: UnvalidatedUserInput) -> Result<Self, Self::Error> {
        if value.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let dob = parse_date(&value.dob)?;

        Ok(UserInput {
            name: value.name,
            dob,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, dob: &str) -> UnvalidatedUserInput {
        UnvalidatedUserInput {
            name: name.to_string(),
            dob: dob.to_string(),
        }
    }

    #[test]
    fn normalizes_dob_for_storage() {
        let user = UserInput::try_from(input("Ada", "1815-12-10T08:00:00Z")).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.stored_dob(), "1815-12-10");
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(
            UserInput::try_from(input("", "1990-01-01")),
            Err(UserValidationError::EmptyName)
        );
        assert_eq!(
            UserInput::try_from(input("   ", "1990-01-01")),
            Err(UserValidationError::EmptyName)
        );
    }

    #[test]
    fn rejects_unparseable_dob() {
        let err = UserInput::try_from(input("Ada", "yesterday")).unwrap_err();
        assert!(matches!(err, UserValidationError::InvalidDob(_)));
        assert_eq!(err.to_string(), "invalid date format: yesterday");
    }
}
