//! Recipe route handlers.
//!
//! Thin adapters from HTTP to [`crate::services::RecipeService`]. Bodies are
//! taken as raw JSON so that the service's validation, not serde, decides
//! what a bad payload is. Path IDs are read as `i64`: an integer too large
//! for a stored ID names no recipe, so it is a `not_found` rather than a
//! malformed request.

use axum::{Json, extract::State};
use recipe_box_core::{Recipe, RecipeId, validate};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Map a path ID onto the stored ID range.
fn recipe_id(raw: i64) -> Result<RecipeId> {
    i32::try_from(raw)
        .map(RecipeId::new)
        .map_err(|_| AppError::NotFound("recipe not found".to_string()))
}

/// List all recipes.
///
/// GET /recipes
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>> {
    let recipes = state.recipe_service().list().await?;
    Ok(Json(recipes))
}

/// Get a single recipe.
///
/// GET /recipes/{id}
///
/// # Errors
///
/// Returns `not_found` if the recipe does not exist.
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Recipe>> {
    let recipe = state.recipe_service().get(recipe_id(id)?).await?;
    Ok(Json(recipe))
}

/// Create a recipe.
///
/// POST /recipes
///
/// # Errors
///
/// Returns `validation_error` if the payload breaks a field rule.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Value>,
) -> Result<Json<Recipe>> {
    let recipe = state.recipe_service().create(&payload).await?;
    Ok(Json(recipe))
}

/// Replace every field of a recipe.
///
/// PUT /recipes/{id}
///
/// # Errors
///
/// Returns `validation_error` if the payload breaks a field rule, or
/// `not_found` if the recipe does not exist.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<Value>,
) -> Result<Json<Recipe>> {
    let id = match recipe_id(id) {
        Ok(id) => id,
        Err(not_found) => {
            // An invalid payload is reported before a missing recipe
            validate(&payload)?;
            return Err(not_found);
        }
    };
    let recipe = state.recipe_service().update(id, &payload).await?;
    Ok(Json(recipe))
}

/// Delete a recipe.
///
/// DELETE /recipes/{id}
///
/// # Errors
///
/// Returns `not_found` if the recipe does not exist.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>> {
    state.recipe_service().delete(recipe_id(id)?).await?;
    Ok(Json(DeleteResponse {
        message: "Recipe deleted",
    }))
}
