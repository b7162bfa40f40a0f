//! Integration tests for Recipe Box.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process tests (no external services)
//! cargo test -p recipe-box-integration-tests
//!
//! # Against a running server and database
//! RECIPES_BASE_URL=http://localhost:8000 \
//! RECIPES_TEST_DATABASE_URL=postgres://localhost/recipes_test \
//!     cargo test -p recipe-box-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `in_process` - Full router served on an ephemeral port, in-memory store
//! - `recipes_api` - HTTP tests against a running server
//! - `postgres_repository` - Repository tests against a live database

use recipe_box_server::{routes, state::AppState};
use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for a running server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("RECIPES_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Build an HTTP client for tests.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// A title that will not collide with data left by earlier runs.
#[must_use]
pub fn unique_title(prefix: &str) -> String {
    format!("{prefix} {}", Uuid::new_v4().simple())
}

/// A valid recipe payload with the given title.
#[must_use]
pub fn sample_recipe(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A test recipe description",
        "ingredients": ["ingredient1", "ingredient2"],
        "instructions": "Mix ingredients."
    })
}

/// Serve the full router over an in-memory store on an ephemeral port.
///
/// Returns the base URL. The server lives until the test runtime shuts down.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn spawn_in_memory_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Bound listener has an address");

    let app = routes::router(AppState::in_memory());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}
