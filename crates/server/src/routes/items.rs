//! Item route handlers for the minimal demo resource.

use axum::{Json, extract::State};
use recipe_box_core::{Item, ItemId, ItemName};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::extract::{ApiPath, ApiQuery};
use crate::state::AppState;

/// Query parameters for item creation.
#[derive(Debug, Deserialize)]
pub struct CreateItemQuery {
    pub name: Option<String>,
}

/// Create an item.
///
/// POST /items?name=...
///
/// # Errors
///
/// Returns `validation_error` if the name is missing or not 1-100 characters.
pub async fn create(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CreateItemQuery>,
) -> Result<Json<Item>> {
    let name = ItemName::parse(query.name.as_deref())?;
    let item = state.items().create(name).await?;
    Ok(Json(item))
}

/// Get a single item.
///
/// GET /items/{id}
///
/// # Errors
///
/// Returns `not_found` if the item does not exist.
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Item>> {
    let not_found = || AppError::NotFound("item not found".to_string());

    // IDs beyond the `i32` range were never assigned
    let id = i32::try_from(id).map(ItemId::new).map_err(|_| not_found())?;
    state.items().get(id).await.map(Json).ok_or_else(not_found)
}
