//! extrack CLI - exercise log service entry point
//!
//! One subcommand today: `serve`, which connects to PostgreSQL,
//! bootstraps the schema, and runs the HTTP server.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod serve;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "extrack",
    author,
    version,
    about = "HTTP service for tracking user exercise logs"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real deployments set the variables directly
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
    }
}
