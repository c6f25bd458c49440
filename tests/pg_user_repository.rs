//! Runs against a live Postgres when `DATABASE_URL` is set; otherwise every
//! test returns early.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use user_service::adapter::store::pg::user::PgUserRepository;
use user_service::core::domain::entity::user::UserRepository;
use user_service::core::domain::repository::RepositoryError;

static SCHEMA: OnceCell<()> = OnceCell::const_new();

async fn repository() -> Option<(PgUserRepository, PgPool)> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL missing; skipping Postgres repository tests");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to DATABASE_URL");
    SCHEMA
        .get_or_init(|| async {
            sqlx::raw_sql(include_str!("../schema.sql"))
                .execute(&pool)
                .await
                .expect("apply schema");
        })
        .await;

    Some((PgUserRepository::new(pool.clone()), pool))
}

#[tokio::test]
async fn create_get_update_delete() {
    let Some((repo, _pool)) = repository().await else {
        return;
    };

    let id = repo.create("pg-user", "1990-01-01").await.unwrap();
    let user = repo.get_by_id(id).await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.name, "pg-user");
    assert_eq!(user.dob, "1990-01-01");

    repo.update(id, "pg-renamed", "1991-02-02").await.unwrap();
    let user = repo.get_by_id(id).await.unwrap();
    assert_eq!(user.name, "pg-renamed");
    assert_eq!(user.dob, "1991-02-02");

    repo.delete(id).await.unwrap();
    assert_eq!(
        repo.get_by_id(id).await,
        Err(RepositoryError::user_not_found(id))
    );
}

#[tokio::test]
async fn writes_to_missing_rows_are_not_errors() {
    let Some((repo, _pool)) = repository().await else {
        return;
    };

    repo.update(i32::MAX, "nobody", "2000-01-01").await.unwrap();
    repo.delete(i32::MAX).await.unwrap();
    assert!(matches!(
        repo.get_by_id(i32::MAX).await,
        Err(RepositoryError::NotFound { .. })
    ));
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    let Some((repo, _pool)) = repository().await else {
        return;
    };

    let a = repo.create("pg-list-a", "1980-01-01").await.unwrap();
    let b = repo.create("pg-list-b", "1981-01-01").await.unwrap();

    let users = repo.list().await.unwrap();
    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(ids.contains(&a) && ids.contains(&b));

    repo.delete(a).await.unwrap();
    repo.delete(b).await.unwrap();
}
