//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health              - Liveness check
//! GET    /health/ready        - Readiness check (pings the recipe store)
//!
//! # Recipes
//! GET    /recipes             - List all recipes
//! POST   /recipes             - Create a recipe
//! GET    /recipes/{id}        - Get one recipe
//! PUT    /recipes/{id}        - Replace a recipe
//! DELETE /recipes/{id}        - Delete a recipe
//!
//! # Items
//! POST   /items?name=...      - Create an item
//! GET    /items/{id}          - Get one item
//! ```
//!
//! Unknown paths answer 404 and unsupported methods 405, both as
//! `http_error` envelopes.

pub mod health;
pub mod items;
pub mod recipes;

use std::time::Duration;

use axum::{
    Router,
    http::{Request, Response, StatusCode},
    middleware,
    routing::{get, post},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::error::AppError;
use crate::middleware::{
    error_log_middleware, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Create the recipe routes router.
pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(recipes::index).post(recipes::create))
        .route(
            "/recipes/{id}",
            get(recipes::show)
                .put(recipes::update)
                .delete(recipes::delete),
        )
}

/// Create the item routes router.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(items::create))
        .route("/items/{id}", get(items::show))
}

/// Build the full application router with its middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(recipe_routes())
        .merge(item_routes())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(error_log_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                        request_id = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .on_response(response, latency, span);
                }),
        )
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::http(StatusCode::NOT_FOUND, "Not Found")
}

async fn method_not_allowed() -> AppError {
    AppError::http(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
