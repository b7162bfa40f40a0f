//! Recipe service.
//!
//! Orchestrates validation, storage calls and response shaping for the five
//! recipe operations. Every outcome is an explicit `Result`; the HTTP layer
//! turns `RecipeError` into a status code and error envelope.

use recipe_box_core::{Recipe, RecipeId, ValidationError, validate};
use serde_json::Value;
use thiserror::Error;

use crate::db::{RecipeRepository, RepositoryError};
use crate::models::to_record;

/// Errors that can occur during recipe operations.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// Payload failed a field rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No recipe has the requested ID.
    #[error("recipe {0} not found")]
    NotFound(RecipeId),

    /// Repository/database error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Recipe service.
///
/// Borrows an injected repository for the duration of a request.
pub struct RecipeService<'a> {
    recipes: &'a dyn RecipeRepository,
}

impl<'a> RecipeService<'a> {
    /// Create a new recipe service.
    #[must_use]
    pub const fn new(recipes: &'a dyn RecipeRepository) -> Self {
        Self { recipes }
    }

    /// List all recipes in ID order.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Repository` if the store fails.
    pub async fn list(&self) -> Result<Vec<Recipe>, RecipeError> {
        let rows = self.recipes.list().await?;
        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    /// Get a recipe by ID.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::NotFound` if no recipe has this ID.
    /// Returns `RecipeError::Repository` if the store fails.
    pub async fn get(&self, id: RecipeId) -> Result<Recipe, RecipeError> {
        self.recipes
            .get(id)
            .await?
            .map(Recipe::from)
            .ok_or(RecipeError::NotFound(id))
    }

    /// Validate a payload and store it as a new recipe.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Validation` if the payload breaks a field rule.
    /// Returns `RecipeError::Repository` if the store fails.
    pub async fn create(&self, payload: &Value) -> Result<Recipe, RecipeError> {
        let fields = validate(payload)?;
        let stored = self.recipes.insert(to_record(&fields)).await?;

        tracing::info!(recipe_id = %stored.id, "Recipe created");
        Ok(stored.into())
    }

    /// Validate a payload and replace every field of an existing recipe.
    ///
    /// Validation runs first, so an invalid payload is rejected even when the
    /// ID does not exist. This is a full replacement, not a merge.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Validation` if the payload breaks a field rule.
    /// Returns `RecipeError::NotFound` if no recipe has this ID.
    /// Returns `RecipeError::Repository` if the store fails.
    pub async fn update(&self, id: RecipeId, payload: &Value) -> Result<Recipe, RecipeError> {
        let fields = validate(payload)?;
        let stored = self
            .recipes
            .update(id, to_record(&fields))
            .await?
            .ok_or(RecipeError::NotFound(id))?;

        tracing::info!(recipe_id = %id, "Recipe updated");
        Ok(stored.into())
    }

    /// Permanently delete a recipe.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::NotFound` if no recipe has this ID.
    /// Returns `RecipeError::Repository` if the store fails.
    pub async fn delete(&self, id: RecipeId) -> Result<(), RecipeError> {
        if !self.recipes.delete(id).await? {
            return Err(RecipeError::NotFound(id));
        }

        tracing::info!(recipe_id = %id, "Recipe deleted");
        Ok(())
    }
}
