//! Database reachability check

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the ping command
#[derive(Parser, Debug)]
pub struct PingArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Connect, ping, and report.
pub async fn run_ping(args: PingArgs) -> Result<()> {
    let pool = args.database.connect().await?;
    pool.close().await;

    println!("database reachable");
    Ok(())
}
