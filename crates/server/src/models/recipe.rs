//! Mapping between wire recipes and stored rows.
//!
//! Ingredients are stored in a native `TEXT[]` column, so list order and
//! content survive a write/read round trip unchanged. `instructions` is a
//! nullable column; rows written by other tools may hold `NULL`, which reads
//! back as an empty string.

use recipe_box_core::{Recipe, RecipeFields, RecipeId};

/// The mutable columns of a `recipes` row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RecipeRecord {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
}

/// A full `recipes` row including the store-assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoredRecipe {
    pub id: RecipeId,
    #[sqlx(flatten)]
    pub record: RecipeRecord,
}

/// Convert validated recipe fields into a row to persist.
#[must_use]
pub fn to_record(fields: &RecipeFields) -> RecipeRecord {
    RecipeRecord {
        title: fields.title.clone(),
        description: fields.description.clone(),
        ingredients: fields.ingredients.clone(),
        instructions: Some(fields.instructions.clone()),
    }
}

/// Convert a persisted row back into recipe fields.
#[must_use]
pub fn from_record(record: RecipeRecord) -> RecipeFields {
    RecipeFields {
        title: record.title,
        description: record.description,
        ingredients: record.ingredients,
        instructions: record.instructions.unwrap_or_default(),
    }
}

impl From<StoredRecipe> for Recipe {
    fn from(stored: StoredRecipe) -> Self {
        Self::from_parts(stored.id, from_record(stored.record))
    }
}
