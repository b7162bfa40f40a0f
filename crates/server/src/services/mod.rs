//! Business logic services.
//!
//! # Services
//!
//! - `recipes` - Validated recipe CRUD over a [`crate::db::RecipeRepository`]

pub mod recipes;

pub use recipes::{RecipeError, RecipeService};
