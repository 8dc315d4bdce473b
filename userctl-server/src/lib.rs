//! userctl-server: HTTP CRUD service for a single users table
//!
//! Five routes map onto five parameterized statements. Storage sits behind
//! the [`db::UserStore`] trait and is injected through [`AppState`].

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{InMemoryUserStore, PgUserStore, StoreError, UserStore};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::User;
pub use state::AppState;
