//! The `serve` subcommand: connect, bootstrap the schema, run the server

use anyhow::{Context, Result};
use clap::Parser;
use extrack_server::db::{create_pool, migrations};
use extrack_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Allow requests from any origin (development only)
    #[arg(long)]
    pub cors_permissive: bool,
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("database connection established");

    migrations::run(&pool)
        .await
        .context("schema bootstrap failed")?;

    let bind_addr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid bind address")?;

    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    run_server(pool, config).await?;
    Ok(())
}
