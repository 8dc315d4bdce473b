//! In-memory user storage
//!
//! Behaves like the users table without a database: rows keep insertion
//! order, duplicate names are allowed, and each row gets an internal id that
//! never leaves this module.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{StoreError, UserStore};
use crate::models::User;

#[derive(Debug)]
struct Row {
    _id: i64,
    user: User,
}

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: Vec<Row>,
}

impl Table {
    fn push(&mut self, user: User) {
        self.next_id += 1;
        self.rows.push(Row {
            _id: self.next_id,
            user,
        });
    }
}

/// User store held in process memory
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<Table>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `users`, in order.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut table = Table::default();
        for user in users {
            table.push(user);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.table.write().await.push(user.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().map(|row| row.user.clone()).collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<User, StoreError> {
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .find(|row| row.user.name == name)
            .map(|row| row.user.clone())
            .ok_or(StoreError::Lookup)
    }

    async fn update_by_name(&self, user: &User) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        for row in table.rows.iter_mut().filter(|row| row.user.name == user.name) {
            row.user = user.clone();
        }
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.user.name != name);

        if table.rows.len() == before {
            return Err(StoreError::UserNotFound(name.to_owned()));
        }
        Ok(())
    }
}
