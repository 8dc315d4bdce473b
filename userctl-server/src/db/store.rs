//! Storage accessor trait for the users table

use async_trait::async_trait;

use crate::models::User;

/// Storage failure.
///
/// The display text is what callers are allowed to see; the underlying
/// database error is kept as the source and logged where it happens.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to add the user")]
    Insert(#[source] sqlx::Error),

    #[error("failed to collect user information from db")]
    Query(#[source] sqlx::Error),

    #[error("failed to scan the values from db")]
    Scan(#[source] sqlx::Error),

    /// No row matched, or the matched row could not be read
    #[error("invalid username, failed to get user information from db")]
    Lookup,

    #[error("failed to update given user details")]
    Update(#[source] sqlx::Error),

    #[error("failed to remove the user")]
    Delete(#[source] sqlx::Error),

    /// Delete matched zero rows
    #[error("given user `{0}` not exists")]
    UserNotFound(String),
}

/// The five operations the HTTP layer needs from storage.
///
/// `name` is the lookup key everywhere. Uniqueness is whatever the backing
/// table enforces; when several rows share a name, `get_by_name` returns the
/// first one storage yields and update/delete act on all of them.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new row.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// All rows in storage order. Empty table gives an empty vec.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// First row whose name matches.
    async fn get_by_name(&self, name: &str) -> Result<User, StoreError>;

    /// Overwrite every field of rows matching `user.name`.
    ///
    /// Matching zero rows is not an error.
    async fn update_by_name(&self, user: &User) -> Result<(), StoreError>;

    /// Remove rows matching `name`, failing with
    /// [`StoreError::UserNotFound`] if none did.
    async fn delete_by_name(&self, name: &str) -> Result<(), StoreError>;
}
