//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::{ItemStore, MemoryRecipeRepository, RecipeRepository};
use crate::services::RecipeService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and hands each request the
/// injected store handles. There is no process-wide mutable state beyond what
/// lives behind these handles.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    recipes: Arc<dyn RecipeRepository>,
    items: ItemStore,
}

impl AppState {
    /// Create a new application state over a recipe repository.
    #[must_use]
    pub fn new(recipes: Arc<dyn RecipeRepository>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                recipes,
                items: ItemStore::new(),
            }),
        }
    }

    /// State backed by a fresh in-memory repository.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryRecipeRepository::new()))
    }

    /// Get a reference to the recipe repository.
    #[must_use]
    pub fn recipes(&self) -> &dyn RecipeRepository {
        self.inner.recipes.as_ref()
    }

    /// A recipe service borrowing this state's repository.
    #[must_use]
    pub fn recipe_service(&self) -> RecipeService<'_> {
        RecipeService::new(self.recipes())
    }

    /// Get a reference to the item store.
    #[must_use]
    pub fn items(&self) -> &ItemStore {
        &self.inner.items
    }
}
