//! PostgreSQL-backed user storage
//!
//! Handles the users table with plain parameterized statements:
//! - list: no ORDER BY, rows come back in storage order
//! - update: no affected-row check
//! - delete: zero affected rows is reported as not found

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, warn};

use super::store::{StoreError, UserStore};
use crate::models::User;

/// Row as stored, including the internal id
#[derive(Debug, FromRow)]
struct UserRow {
    #[sqlx(rename = "id")]
    _id: i64,
    name: String,
    email: String,
    location: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            location: row.location,
        }
    }
}

/// True when the statement ran but a row could not be decoded into [`UserRow`].
fn is_decode_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
    )
}

/// User store over a shared connection pool
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO users (name, email, location) VALUES ($1, $2, $3)")
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.location)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(username = %user.name, error = %e, "db insert failed");
                StoreError::Insert(e)
            })?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, email, location FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                if is_decode_error(&e) {
                    error!(error = %e, "db list: failed to scan the values from row");
                    StoreError::Scan(e)
                } else {
                    error!(error = %e, "db list: query failed");
                    StoreError::Query(e)
                }
            })?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, location FROM users WHERE name = $1 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(username = %name, error = %e, "db get: failed to read the row");
            StoreError::Lookup
        })?
        .ok_or_else(|| {
            warn!(username = %name, "db get: no matching row");
            StoreError::Lookup
        })?;

        Ok(row.into())
    }

    async fn update_by_name(&self, user: &User) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE users SET name = $1, email = $2, location = $3 WHERE name = $4",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.location)
        .bind(&user.name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(username = %user.name, error = %e, "db update failed");
            StoreError::Update(e)
        })?;

        debug!(username = %user.name, rows = result.rows_affected(), "db update");
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(username = %name, error = %e, "db remove failed");
                StoreError::Delete(e)
            })?;

        if result.rows_affected() == 0 {
            warn!(username = %name, "db remove: 0 rows affected");
            return Err(StoreError::UserNotFound(name.to_owned()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::db::create_pool;

    #[test]
    fn decode_errors_are_told_apart() {
        assert!(is_decode_error(&sqlx::Error::ColumnNotFound("id".into())));
        assert!(!is_decode_error(&sqlx::Error::PoolTimedOut));
        assert!(!is_decode_error(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn row_id_is_dropped() {
        let row = UserRow {
            _id: 42,
            name: "alice".into(),
            email: "a@x.com".into(),
            location: "nyc".into(),
        };
        assert_eq!(User::from(row), User::new("alice", "a@x.com", "nyc"));
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p userctl-server -- --ignored

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn unique_name(prefix: &str) -> String {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{}-{n}", std::process::id())
    }

    async fn test_store() -> PgUserStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        sqlx::raw_sql(include_str!("../../schema/users.sql"))
            .execute(&pool)
            .await
            .expect("schema setup failed");
        PgUserStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get_round_trips() {
        let store = test_store().await;
        let user = User::new(unique_name("alice"), "a@x.com", "nyc");

        store.insert(&user).await.unwrap();
        let fetched = store.get_by_name(&user.name).await.unwrap();
        assert_eq!(fetched, user);

        let all = store.list().await.unwrap();
        assert!(all.contains(&user));

        store.delete_by_name(&user.name).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_overwrites_fields() {
        let store = test_store().await;
        let name = unique_name("bob");
        store
            .insert(&User::new(name.clone(), "b@x.com", "nyc"))
            .await
            .unwrap();

        let updated = User::new(name.clone(), "b2@x.com", "sf");
        store.update_by_name(&updated).await.unwrap();
        assert_eq!(store.get_by_name(&name).await.unwrap(), updated);

        store.delete_by_name(&name).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_of_missing_name_succeeds() {
        let store = test_store().await;
        let ghost = User::new(unique_name("ghost"), "g@x.com", "nowhere");
        store.update_by_name(&ghost).await.unwrap();
        assert!(matches!(
            store.get_by_name(&ghost.name).await,
            Err(StoreError::Lookup)
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_of_missing_name_is_not_found() {
        let store = test_store().await;
        let name = unique_name("nobody");
        match store.delete_by_name(&name).await {
            Err(StoreError::UserNotFound(n)) => assert_eq!(n, name),
            other => panic!("expected UserNotFound, got {other:?}"),
        }
    }
}
