//! Recipe Box CLI - Schema and data management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the recipes table if it does not exist
//! recipes-cli schema
//!
//! # Seed recipes from a YAML or JSON file into PostgreSQL
//! recipes-cli seed recipes.yaml
//!
//! # Validate and load a file into a throwaway in-memory store
//! recipes-cli seed recipes.json --store memory
//! ```
//!
//! # Commands
//!
//! - `schema` - Create the `recipes` table
//! - `seed` - Create recipes from a file, validating every entry first

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "recipes-cli")]
#[command(author, version, about = "Recipe Box CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the recipes table in the configured database
    Schema,
    /// Seed recipes from a YAML or JSON file
    Seed {
        /// File holding a list of recipe payloads (.yaml, .yml or .json)
        file: PathBuf,

        /// Store to write into
        #[arg(short, long, value_enum, default_value_t = SeedStore::Postgres)]
        store: SeedStore,
    },
}

/// Target store for `seed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SeedStore {
    Postgres,
    Memory,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Schema => commands::schema::run().await?,
        Commands::Seed { file, store } => {
            commands::seed::run(&file, store == SeedStore::Memory).await?;
        }
    }
    Ok(())
}
