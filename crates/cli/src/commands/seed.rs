//! Seed recipes from a YAML or JSON file.
//!
//! The file holds a list of recipe payloads in the same shape the API accepts
//! on `POST /recipes`. Every entry is validated before anything is written, so
//! a bad file leaves the store untouched.

use std::path::Path;

use recipe_box_core::RecipeId;
use recipe_box_server::db::{MemoryRecipeRepository, RecipeRepository};
use recipe_box_server::services::RecipeService;
use serde_json::Value;
use tracing::info;

use super::{CliError, connect};

/// Input encodings accepted by the seeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick a format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnsupportedFormat(extension)),
        }
    }
}

/// Seed recipes from `path`.
///
/// With `in_memory` set, recipes go into a throwaway store, which makes the
/// command a validation dry run.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, any entry is
/// invalid, or the store fails.
pub async fn run(path: &Path, in_memory: bool) -> Result<(), CliError> {
    let format = Format::from_path(path)?;

    info!(path = %path.display(), "Loading recipes from file");
    let content = tokio::fs::read_to_string(path).await?;
    let payloads = parse_payloads(&content, format)?;

    info!(recipes = payloads.len(), "Parsed file");
    validate_all(&payloads)?;
    info!("All recipes validated");

    let ids = if in_memory {
        let repository = MemoryRecipeRepository::new();
        seed_into(&repository, &payloads).await?
    } else {
        let repository = connect().await?;
        repository.ensure_schema().await?;
        seed_into(&repository, &payloads).await?
    };

    info!(created = ids.len(), "Seeding complete!");
    for id in &ids {
        info!("  Created recipe {id}");
    }

    Ok(())
}

/// Parse the file contents into a list of raw payloads.
///
/// # Errors
///
/// Returns an error if the contents are not a list in the given format.
pub fn parse_payloads(content: &str, format: Format) -> Result<Vec<Value>, CliError> {
    Ok(match format {
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    })
}

/// Check every payload, reporting the first invalid one by position.
///
/// # Errors
///
/// Returns `InvalidRecipe` with the 1-based index of the offending entry.
pub fn validate_all(payloads: &[Value]) -> Result<(), CliError> {
    for (i, payload) in payloads.iter().enumerate() {
        recipe_box_core::validate(payload)
            .map_err(|source| CliError::InvalidRecipe { index: i + 1, source })?;
    }
    Ok(())
}

/// Create each payload through the recipe service.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn seed_into(
    repository: &dyn RecipeRepository,
    payloads: &[Value],
) -> Result<Vec<RecipeId>, CliError> {
    let service = RecipeService::new(repository);
    let mut ids = Vec::with_capacity(payloads.len());

    for payload in payloads {
        ids.push(service.create(payload).await?.id);
    }

    Ok(ids)
}
