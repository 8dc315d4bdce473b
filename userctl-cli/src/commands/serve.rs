//! HTTP server command for the users API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use userctl_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8081)
    #[arg(long, short = 'b', default_value = "127.0.0.1:8081")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server until Ctrl+C/SIGTERM, then release the pool.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = args.database.connect().await?;
    tracing::info!(
        max_connections = args.database.max_connections,
        "Database connection verified"
    );

    let config = ServerConfig { bind_addr: args.bind };
    let served = run_server(pool.clone(), config).await;

    pool.close().await;
    tracing::info!("Database pool closed");

    served.context("Server error")
}
