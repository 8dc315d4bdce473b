//! Database layer - connection pool and user storage
//!
//! - One shared `PgPool`; pooling and thread-safety are left to sqlx
//! - Every statement binds its parameters, nothing is concatenated into SQL
//! - Storage is reached through the [`UserStore`] trait so handlers can run
//!   against [`InMemoryUserStore`] in tests

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::InMemoryUserStore;
pub use pool::{create_pool, create_pool_with_options, verify_connection};
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};

pub use sqlx::PgPool;
