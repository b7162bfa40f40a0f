//! Schema creation command.
//!
//! # Environment Variables
//!
//! - `RECIPES_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use super::{CliError, connect};

/// Create the `recipes` table if it does not exist.
///
/// # Errors
///
/// Returns an error if the connection or the DDL fails.
pub async fn run() -> Result<(), CliError> {
    let repository = connect().await?;

    tracing::info!("Creating recipes table...");
    repository.ensure_schema().await?;

    tracing::info!("Schema ready");
    Ok(())
}
