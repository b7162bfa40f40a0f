//! `PostgreSQL` recipe repository.
//!
//! Reads go straight to the pool. Writes open a transaction, run one
//! statement, and commit; if anything fails before the commit the transaction
//! is dropped and rolled back. Update and delete use `RETURNING` so the
//! existence check and the change happen in the same statement.

use recipe_box_core::RecipeId;
use sqlx::PgPool;

use super::{RecipeRepository, RepositoryError, RepositoryFuture};
use crate::models::{RecipeRecord, StoredRecipe};

const CREATE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS recipes (
        id           SERIAL PRIMARY KEY,
        title        VARCHAR(120) NOT NULL,
        description  TEXT NOT NULL,
        ingredients  TEXT[] NOT NULL,
        instructions TEXT
    )
";

/// Recipe repository backed by a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    /// Create a new repository over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `recipes` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

impl RecipeRepository for PgRecipeRepository {
    fn ping(&self) -> RepositoryFuture<'_, ()> {
        Box::pin(async move {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
    }

    fn list(&self) -> RepositoryFuture<'_, Vec<StoredRecipe>> {
        Box::pin(async move {
            let rows = sqlx::query_as::<_, StoredRecipe>(
                r"
                SELECT id, title, description, ingredients, instructions
                FROM recipes
                ORDER BY id
                ",
            )
            .fetch_all(&self.pool)
            .await?;

            Ok(rows)
        })
    }

    fn get(&self, id: RecipeId) -> RepositoryFuture<'_, Option<StoredRecipe>> {
        Box::pin(async move {
            let row = sqlx::query_as::<_, StoredRecipe>(
                r"
                SELECT id, title, description, ingredients, instructions
                FROM recipes
                WHERE id = $1
                ",
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

            Ok(row)
        })
    }

    fn insert(&self, record: RecipeRecord) -> RepositoryFuture<'_, StoredRecipe> {
        Box::pin(async move {
            let RecipeRecord {
                title,
                description,
                ingredients,
                instructions,
            } = record;

            let mut tx = self.pool.begin().await?;

            let row = sqlx::query_as::<_, StoredRecipe>(
                r"
                INSERT INTO recipes (title, description, ingredients, instructions)
                VALUES ($1, $2, $3, $4)
                RETURNING id, title, description, ingredients, instructions
                ",
            )
            .bind(title)
            .bind(description)
            .bind(ingredients)
            .bind(instructions)
            .fetch_one(&mut *tx)
            .await?;

            tx.commit().await?;

            Ok(row)
        })
    }

    fn update(
        &self,
        id: RecipeId,
        record: RecipeRecord,
    ) -> RepositoryFuture<'_, Option<StoredRecipe>> {
        Box::pin(async move {
            let RecipeRecord {
                title,
                description,
                ingredients,
                instructions,
            } = record;

            let mut tx = self.pool.begin().await?;

            let row = sqlx::query_as::<_, StoredRecipe>(
                r"
                UPDATE recipes
                SET title = $2, description = $3, ingredients = $4, instructions = $5
                WHERE id = $1
                RETURNING id, title, description, ingredients, instructions
                ",
            )
            .bind(id)
            .bind(title)
            .bind(description)
            .bind(ingredients)
            .bind(instructions)
            .fetch_optional(&mut *tx)
            .await?;

            tx.commit().await?;

            Ok(row)
        })
    }

    fn delete(&self, id: RecipeId) -> RepositoryFuture<'_, bool> {
        Box::pin(async move {
            let mut tx = self.pool.begin().await?;

            let deleted = sqlx::query_scalar::<_, RecipeId>(
                r"
                DELETE FROM recipes
                WHERE id = $1
                RETURNING id
                ",
            )
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

            tx.commit().await?;

            Ok(deleted.is_some())
        })
    }
}
