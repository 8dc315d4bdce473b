//! userctl CLI - run and check the users HTTP service
//!
//! Subcommands:
//! - `serve`: connect to the database and serve the users API
//! - `ping`: check the configured database is reachable
//! - `completions`: print shell completion scripts

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "userctl",
    author,
    version,
    about = "HTTP CRUD service for a users table",
    long_about = "Serve list/get/create/update/delete over a single PostgreSQL users table. \
                  Connection settings come from flags, the environment, ./.env or ~/.userctl/.env."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the users HTTP API
    Serve(commands::serve::ServeArgs),
    /// Check that the database accepts connections
    Ping(commands::ping::PingArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: clap_complete::Shell,
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, bin_name, &mut std::io::stdout());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so clap's `env` lookups see values from .env files
    let loaded = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();
    config::log_loaded(&loaded);

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Ping(args) => commands::run_ping(args).await?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}
