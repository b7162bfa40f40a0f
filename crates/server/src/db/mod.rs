//! Recipe storage.
//!
//! # Table: `recipes`
//!
//! ```sql
//! CREATE TABLE recipes (
//!     id           SERIAL PRIMARY KEY,
//!     title        VARCHAR(120) NOT NULL,
//!     description  TEXT NOT NULL,
//!     ingredients  TEXT[] NOT NULL,
//!     instructions TEXT
//! );
//! ```
//!
//! Field rules are enforced by the service before any write, not by the table.
//!
//! # Backends
//!
//! - [`PgRecipeRepository`] - `PostgreSQL` via a sqlx pool
//! - [`MemoryRecipeRepository`] - process-local, for tests and database-less runs
//!
//! Items (the demo resource) are always held in memory by [`ItemStore`].

pub mod items;
pub mod memory;
pub mod recipes;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use recipe_box_core::RecipeId;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::models::{RecipeRecord, StoredRecipe};

pub use items::ItemStore;
pub use memory::MemoryRecipeRepository;
pub use recipes::PgRecipeRepository;

/// Errors from the storage layer.
///
/// Missing rows are not errors; lookups return `Option` and the service
/// decides what absence means.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Every ID in the `i32` range has been handed out.
    #[error("id space exhausted")]
    IdsExhausted,
}

/// Boxed future returned by [`RecipeRepository`] methods.
pub type RepositoryFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, RepositoryError>> + Send + 'a>>;

/// Storage operations the recipe service needs.
///
/// Each call is one atomic unit: implementations either apply the whole
/// change or none of it.
pub trait RecipeRepository: Send + Sync {
    /// Check that the store is reachable.
    fn ping(&self) -> RepositoryFuture<'_, ()>;

    /// All recipes in ID order.
    fn list(&self) -> RepositoryFuture<'_, Vec<StoredRecipe>>;

    /// A single recipe, or `None` if no row has this ID.
    fn get(&self, id: RecipeId) -> RepositoryFuture<'_, Option<StoredRecipe>>;

    /// Persist a new recipe and return it with its assigned ID.
    fn insert(&self, record: RecipeRecord) -> RepositoryFuture<'_, StoredRecipe>;

    /// Replace every mutable column of an existing recipe.
    ///
    /// Returns `None` if no row has this ID.
    fn update(
        &self,
        id: RecipeId,
        record: RecipeRecord,
    ) -> RepositoryFuture<'_, Option<StoredRecipe>>;

    /// Permanently remove a recipe. Returns `false` if no row had this ID.
    fn delete(&self, id: RecipeId) -> RepositoryFuture<'_, bool>;
}

/// Create a `PostgreSQL` connection pool.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
