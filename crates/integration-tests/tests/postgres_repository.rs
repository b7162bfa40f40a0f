//! Repository tests against a live `PostgreSQL` database.
//!
//! These tests require `RECIPES_TEST_DATABASE_URL` pointing at a database the
//! tests may create the `recipes` table in.

use recipe_box_core::{RecipeFields, RecipeId};
use recipe_box_integration_tests::unique_title;
use recipe_box_server::db::{self, PgRecipeRepository, RecipeRepository};
use recipe_box_server::models::to_record;
use secrecy::SecretString;

async fn repository() -> PgRecipeRepository {
    let url = std::env::var("RECIPES_TEST_DATABASE_URL")
        .expect("RECIPES_TEST_DATABASE_URL must be set");
    let pool = db::create_pool(&SecretString::from(url), 4)
        .await
        .expect("Failed to connect to test database");

    let repository = PgRecipeRepository::new(pool);
    repository
        .ensure_schema()
        .await
        .expect("Failed to create recipes table");
    repository
}

fn fields(title: &str, ingredients: &[&str]) -> RecipeFields {
    RecipeFields {
        title: title.to_string(),
        description: "Stored in Postgres".to_string(),
        ingredients: ingredients.iter().map(|s| (*s).to_string()).collect(),
        instructions: "Stir.".to_string(),
    }
}

#[tokio::test]
#[ignore = "Requires PostgreSQL database"]
async fn test_insert_get_round_trip() {
    let repo = repository().await;
    let title = unique_title("Pg roundtrip");

    // Ingredients containing commas and pipes survive unchanged
    let record = to_record(&fields(&title, &["salt, to taste", "a|b", "c"]));
    let stored = repo.insert(record.clone()).await.unwrap();
    assert_eq!(stored.record, record);

    let fetched = repo.get(stored.id).await.unwrap().unwrap();
    assert_eq!(fetched.record, record);

    assert!(repo.delete(stored.id).await.unwrap());
}

#[tokio::test]
#[ignore = "Requires PostgreSQL database"]
async fn test_update_and_delete_missing() {
    let repo = repository().await;
    let missing = RecipeId::new(i32::MAX);
    let record = to_record(&fields("Nope", &["x"]));

    assert!(repo.update(missing, record).await.unwrap().is_none());
    assert!(!repo.delete(missing).await.unwrap());
    assert!(repo.get(missing).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "Requires PostgreSQL database"]
async fn test_update_replaces_all_fields() {
    let repo = repository().await;
    let stored = repo
        .insert(to_record(&fields(&unique_title("Pg update"), &["a", "b"])))
        .await
        .unwrap();

    let replacement = to_record(&fields(&unique_title("Pg updated"), &["only"]));
    let updated = repo
        .update(stored.id, replacement.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.record, replacement);

    assert!(repo.delete(stored.id).await.unwrap());
}

#[tokio::test]
#[ignore = "Requires PostgreSQL database"]
async fn test_concurrent_delete_has_one_winner() {
    let repo = repository().await;
    let stored = repo
        .insert(to_record(&fields(&unique_title("Pg race"), &["a"])))
        .await
        .unwrap();

    let (first, second) = tokio::join!(repo.delete(stored.id), repo.delete(stored.id));
    let wins = [first.unwrap(), second.unwrap()]
        .iter()
        .filter(|deleted| **deleted)
        .count();
    assert_eq!(wins, 1);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL database"]
async fn test_ping() {
    let repo = repository().await;
    repo.ping().await.unwrap();
}
