//! Recipe domain types.
//!
//! [`RecipeFields`] is everything a client supplies; [`Recipe`] adds the
//! store-assigned [`RecipeId`]. Both serialize to the wire shape
//! `{id?, title, description, ingredients, instructions}`.

use serde::{Deserialize, Serialize};

use super::id::RecipeId;

/// The mutable fields of a recipe.
///
/// Values built by [`crate::validate`] satisfy every field rule. Values built
/// by hand can be checked with [`RecipeFields::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFields {
    /// Recipe title, 1-120 characters.
    pub title: String,
    /// Free-form description, 1-2000 characters.
    pub description: String,
    /// Ingredient lines in display order, each 1-200 characters.
    pub ingredients: Vec<String>,
    /// Preparation steps, at most 5000 characters. Empty when not given.
    #[serde(default)]
    pub instructions: String,
}

/// A persisted recipe as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned ID, immutable once assigned.
    pub id: RecipeId,
    /// Recipe title.
    pub title: String,
    /// Recipe description.
    pub description: String,
    /// Ingredient lines in display order.
    pub ingredients: Vec<String>,
    /// Preparation steps (possibly empty).
    pub instructions: String,
}

impl Recipe {
    /// Attach an ID to a set of recipe fields.
    #[must_use]
    pub fn from_parts(id: RecipeId, fields: RecipeFields) -> Self {
        let RecipeFields {
            title,
            description,
            ingredients,
            instructions,
        } = fields;

        Self {
            id,
            title,
            description,
            ingredients,
            instructions,
        }
    }
}
