//! CLI command implementations.

pub mod schema;
pub mod seed;

use recipe_box_core::ValidationError;
use recipe_box_server::config::{ConfigError, ServerConfig, StoreConfig};
use recipe_box_server::db::{self, PgRecipeRepository, RepositoryError};
use recipe_box_server::services::RecipeError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file extension '{0}', expected .yaml, .yml or .json")]
    UnsupportedFormat(String),

    #[error("Recipe #{index}: {source}")]
    InvalidRecipe {
        index: usize,
        source: ValidationError,
    },

    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Recipe error: {0}")]
    Recipe(#[from] RecipeError),
}

/// Connect to the `PostgreSQL` recipe store named by the environment.
///
/// `RECIPES_STORE` is ignored here: these commands always target the database.
///
/// # Errors
///
/// Returns an error if the database URL is missing or the connection fails.
pub async fn connect() -> Result<PgRecipeRepository, CliError> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_lookup(|key| match key {
        "RECIPES_STORE" => Some("postgres".to_string()),
        _ => std::env::var(key).ok(),
    })?;

    let StoreConfig::Postgres {
        database_url,
        max_connections,
    } = config.store
    else {
        return Err(ConfigError::InvalidEnvVar(
            "RECIPES_STORE".to_string(),
            "expected 'postgres'".to_string(),
        )
        .into());
    };

    tracing::info!("Connecting to recipes database...");
    let pool = db::create_pool(&database_url, max_connections)
        .await
        .map_err(RepositoryError::from)?;

    Ok(PgRecipeRepository::new(pool))
}
