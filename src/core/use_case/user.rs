use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::birth_date::{calculate_age, parse_date};
use crate::core::domain::entity::user::user::{UnvalidatedUserInput, UserInput};
use crate::core::domain::entity::user::{User, UserProfile, UserRepository};
use crate::core::port::user::{SkippedUser, UserError, UserInputBoundary, UserListing};

pub struct UserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Reads back a row after a write so the response reflects what was stored.
    async fn fetch_profile(&self, id: i32) -> Result<UserProfile, UserError> {
        let user = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| UserError::from_repository(id, e))?;
        to_profile(user)
    }
}

fn to_profile(user: User) -> Result<UserProfile, UserError> {
    let dob = parse_date(&user.dob).map_err(|source| UserError::UnreadableDob {
        id: user.id,
        source,
    })?;

    Ok(UserProfile {
        id: user.id,
        name: user.name,
        dob,
        age: calculate_age(dob),
    })
}

#[async_trait]
impl UserInputBoundary for UserUseCase {
    async fn create_user(&self, input: UnvalidatedUserInput) -> Result<UserProfile, UserError> {
        let input = UserInput::try_from(input)?;
        let id = self
            .repository
            .create(&input.name, &input.stored_dob())
            .await?;

        self.fetch_profile(id).await
    }

    async fn get_user(&self, id: i32) -> Result<UserProfile, UserError> {
        self.fetch_profile(id).await
    }

    async fn list_users(&self) -> Result<UserListing, UserError> {
        let mut listing = UserListing::default();

        for user in self.repository.list().await? {
            match to_profile(user) {
                Ok(profile) => listing.users.push(profile),
                Err(UserError::UnreadableDob { id, source }) => {
                    listing.skipped.push(SkippedUser { id, reason: source })
                }
                Err(other) => return Err(other),
            }
        }

        Ok(listing)
    }

    async fn update_user(
        &self,
        id: i32,
        input: UnvalidatedUserInput,
    ) -> Result<UserProfile, UserError> {
        let input = UserInput::try_from(input)?;
        self.repository
            .update(id, &input.name, &input.stored_dob())
            .await?;

        self.fetch_profile(id).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), UserError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::store::memory::user::InMemoryUserRepository;
    use crate::core::domain::birth_date::{format_date, DateParseError};
    use crate::core::domain::entity::user::user::UserValidationError;
    use chrono::{Datelike, Local};

    fn input(name: &str, dob: &str) -> UnvalidatedUserInput {
        UnvalidatedUserInput {
            name: name.to_string(),
            dob: dob.to_string(),
        }
    }

    fn use_case() -> (UserUseCase, Arc<InMemoryUserRepository>) {
        let repository = Arc::new(InMemoryUserRepository::new());
        (UserUseCase::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn create_then_get_returns_normalized_dob() {
        let (use_case, _) = use_case();

        let created = use_case
            .create_user(input("Grace", "1906-12-09T00:00:00Z"))
            .await
            .unwrap();
        let fetched = use_case.get_user(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Grace");
        assert_eq!(format_date(fetched.dob), "1906-12-09");
    }

    #[tokio::test]
    async fn create_rejects_bad_dob_before_storage() {
        let (use_case, repository) = use_case();

        let err = use_case
            .create_user(input("Grace", "not-a-date"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            UserError::InvalidInput(UserValidationError::InvalidDob(_))
        ));
        assert!(repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let (use_case, _) = use_case();
        let err = use_case.get_user(42).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound { id: 42 }));
    }

    #[tokio::test]
    async fn get_with_corrupt_dob_is_unreadable() {
        let (use_case, repository) = use_case();
        let id = repository.create("Broken", "someday").await.unwrap();

        let err = use_case.get_user(id).await.unwrap_err();
        assert!(matches!(err, UserError::UnreadableDob { id: got, .. } if got == id));
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let (use_case, _) = use_case();
        let listing = use_case.list_users().await.unwrap();
        assert!(listing.users.is_empty());
        assert!(listing.skipped.is_empty());
    }

    #[tokio::test]
    async fn list_skips_rows_with_unreadable_dob() {
        let (use_case, repository) = use_case();
        let first = repository.create("A", "1990-01-01").await.unwrap();
        let broken = repository.create("B", "31/12/1990").await.unwrap();
        let third = repository.create("C", "1991-02-03T10:00:00+01:00").await.unwrap();

        let listing = use_case.list_users().await.unwrap();

        let ids: Vec<i32> = listing.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![first, third]);
        assert_eq!(
            listing.skipped,
            vec![SkippedUser {
                id: broken,
                reason: DateParseError::InvalidDateFormat("31/12/1990".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn update_round_trip_recalculates_age() {
        let (use_case, _) = use_case();
        let created = use_case
            .create_user(input("Z", "2010-06-15"))
            .await
            .unwrap();

        let updated = use_case
            .update_user(created.id, input("A", "1990-01-01"))
            .await
            .unwrap();
        let fetched = use_case.get_user(created.id).await.unwrap();

        assert_eq!(updated, fetched);
        assert_eq!(fetched.name, "A");
        assert_eq!(format_date(fetched.dob), "1990-01-01");
        assert_eq!(fetched.age, Local::now().date_naive().year() - 1990);
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let (use_case, repository) = use_case();

        let err = use_case
            .update_user(7, input("A", "1990-01-01"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotFound { id: 7 }));
        assert!(repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_user_succeeds() {
        let (use_case, _) = use_case();
        use_case.delete_user(99).await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_the_user() {
        let (use_case, _) = use_case();
        let created = use_case
            .create_user(input("Gone", "2000-01-01"))
            .await
            .unwrap();

        use_case.delete_user(created.id).await.unwrap();

        assert!(matches!(
            use_case.get_user(created.id).await,
            Err(UserError::NotFound { .. })
        ));
    }
}
