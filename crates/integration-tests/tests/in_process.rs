//! End-to-end tests over real HTTP against an in-process server.
//!
//! The server uses the in-memory store, so these run without any external
//! services.

use recipe_box_integration_tests::{client, sample_recipe, spawn_in_memory_server};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_recipe_lifecycle() {
    let base_url = spawn_in_memory_server().await;
    let client = client();

    let resp = client
        .post(format!("{base_url}/recipes"))
        .json(&sample_recipe("Lifecycle"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["id"], 1);

    let resp = client
        .put(format!("{base_url}/recipes/1"))
        .json(&json!({
            "title": "Renamed",
            "description": "New description",
            "ingredients": ["water"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["title"], "Renamed");
    assert_eq!(updated["instructions"], "");

    let resp = client
        .delete(format!("{base_url}/recipes/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"message": "Recipe deleted"}));

    let resp = client
        .get(format!("{base_url}/recipes/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({"error": {"code": "not_found", "message": "recipe not found"}})
    );
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let base_url = spawn_in_memory_server().await;
    let client = client();

    for path in ["/health", "/recipes", "/recipes/42", "/does-not-exist"] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .unwrap();
        let headers = resp.headers();

        assert_eq!(headers["x-content-type-options"], "nosniff", "{path}");
        assert_eq!(headers["x-frame-options"], "DENY", "{path}");
        assert_eq!(headers["referrer-policy"], "no-referrer", "{path}");
        assert!(headers.contains_key("content-security-policy"), "{path}");
    }
}

#[tokio::test]
async fn test_request_id_round_trip() {
    let base_url = spawn_in_memory_server().await;

    let resp = client()
        .get(format!("{base_url}/health"))
        .header("x-request-id", "trace-me-123")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.headers()["x-request-id"], "trace-me-123");
}

#[tokio::test]
async fn test_items_demo() {
    let base_url = spawn_in_memory_server().await;
    let client = client();

    let resp = client
        .post(format!("{base_url}/items?name=whisk"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let item: Value = resp.json().await.unwrap();
    assert_eq!(item, json!({"id": 1, "name": "whisk"}));

    let resp = client
        .post(format!("{base_url}/items"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
