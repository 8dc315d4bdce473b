//! Command implementations for the userctl CLI

pub mod ping;
pub mod serve;

pub use ping::run_ping;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use userctl_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use userctl_server::db::{create_pool_with_options, verify_connection, PgPool};

/// Database connection settings shared by commands that talk to PostgreSQL
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides .env files)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "USERCTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Open the pool and ping it. Either failure is fatal to the caller.
    pub async fn connect(&self) -> Result<PgPool> {
        let database_url = self.database_url.as_deref().context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.userctl/.env",
        )?;

        let pool = create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to create database pool")?;

        verify_connection(&pool)
            .await
            .context("Failed to ping the database")?;

        Ok(pool)
    }
}
