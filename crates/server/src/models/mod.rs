//! Persistence-side models.
//!
//! These types are the row shapes stored in `PostgreSQL`, kept separate from
//! the wire types in `recipe_box_core`.

pub mod recipe;

pub use recipe::{RecipeRecord, StoredRecipe, from_record, to_record};
