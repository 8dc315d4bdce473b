//! Application state shared across handlers

use std::sync::Arc;

use crate::db::UserStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(users: impl UserStore + 'static) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    pub fn from_shared(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }
}
