//! Core types for Recipe Box.
//!
//! This module provides type-safe wrappers for the resources the API serves.

pub mod id;
pub mod item;
pub mod recipe;

pub use id::*;
pub use item::{Item, ItemName};
pub use recipe::{Recipe, RecipeFields};
