//! In-memory recipe repository.
//!
//! Holds rows in a `BTreeMap` behind a `tokio::sync::RwLock`. IDs come from a
//! counter that only grows, so a deleted ID is never handed out again for the
//! lifetime of the repository. Like a `SERIAL` column the counter stops at
//! `i32::MAX`; inserts past it fail with [`RepositoryError::IdsExhausted`].
//! Each handle is injected explicitly; clones share the same rows.

use std::collections::BTreeMap;
use std::sync::Arc;

use recipe_box_core::RecipeId;
use tokio::sync::RwLock;

use super::{RecipeRepository, RepositoryError, RepositoryFuture};
use crate::models::{RecipeRecord, StoredRecipe};

/// Recipe repository that keeps rows in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecipeRepository {
    inner: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i32,
    rows: BTreeMap<RecipeId, RecipeRecord>,
}

impl MemoryRecipeRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn stored(id: RecipeId, record: &RecipeRecord) -> StoredRecipe {
    StoredRecipe {
        id,
        record: record.clone(),
    }
}

impl RecipeRepository for MemoryRecipeRepository {
    fn ping(&self) -> RepositoryFuture<'_, ()> {
        Box::pin(async { Ok(()) })
    }

    fn list(&self) -> RepositoryFuture<'_, Vec<StoredRecipe>> {
        Box::pin(async move {
            let state = self.inner.read().await;
            Ok(state
                .rows
                .iter()
                .map(|(id, record)| stored(*id, record))
                .collect())
        })
    }

    fn get(&self, id: RecipeId) -> RepositoryFuture<'_, Option<StoredRecipe>> {
        Box::pin(async move {
            let state = self.inner.read().await;
            Ok(state.rows.get(&id).map(|record| stored(id, record)))
        })
    }

    fn insert(&self, record: RecipeRecord) -> RepositoryFuture<'_, StoredRecipe> {
        Box::pin(async move {
            let mut state = self.inner.write().await;
            state.last_id = state
                .last_id
                .checked_add(1)
                .ok_or(RepositoryError::IdsExhausted)?;
            let id = RecipeId::new(state.last_id);
            let row = stored(id, &record);
            state.rows.insert(id, record);
            Ok(row)
        })
    }

    fn update(
        &self,
        id: RecipeId,
        record: RecipeRecord,
    ) -> RepositoryFuture<'_, Option<StoredRecipe>> {
        Box::pin(async move {
            let mut state = self.inner.write().await;
            Ok(state.rows.get_mut(&id).map(|existing| {
                *existing = record;
                stored(id, existing)
            }))
        })
    }

    fn delete(&self, id: RecipeId) -> RepositoryFuture<'_, bool> {
        Box::pin(async move {
            let mut state = self.inner.write().await;
            Ok(state.rows.remove(&id).is_some())
        })
    }
}
