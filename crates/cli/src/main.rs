//! Holocron CLI - Schema bootstrap and seed tooling.
//!
//! The API never creates users or catalog rows; this tool is the external
//! admin side of that lifecycle.
//!
//! # Usage
//!
//! ```bash
//! # Create the catalog tables
//! holocron-cli schema
//!
//! # Create the tables, the fixed user, and a sample catalog
//! holocron-cli seed
//! ```
//!
//! # Commands
//!
//! - `schema` - Create the catalog tables if missing
//! - `seed` - Bootstrap the schema and insert the fixed user plus a sample catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "holocron-cli")]
#[command(author, version, about = "Holocron CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the catalog tables if they do not exist
    Schema,
    /// Bootstrap the schema and insert seed data
    Seed,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Schema => commands::schema::create().await?,
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
