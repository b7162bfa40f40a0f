//! Recipe Box - JSON API server for recipes.
//!
//! This binary serves the recipe API on port 8000 by default.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - `PostgreSQL` recipe store, or an in-memory store for local runs
//! - Uniform `{"error": {"code", "message"}}` envelope for every failure

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use recipe_box_server::{
    config::{ServerConfig, StoreConfig},
    db::{self, MemoryRecipeRepository, PgRecipeRepository, RecipeRepository},
    routes,
    state::AppState,
    telemetry,
};

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = telemetry::init_sentry(&config);

    telemetry::init_tracing(&config).expect("Failed to initialize logging");

    let recipes: Arc<dyn RecipeRepository> = match &config.store {
        StoreConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = db::create_pool(database_url, *max_connections)
                .await
                .expect("Failed to create database pool");
            tracing::info!("Database pool created");

            let repository = PgRecipeRepository::new(pool);
            repository
                .ensure_schema()
                .await
                .expect("Failed to prepare recipes table");
            Arc::new(repository)
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory recipe store; data is lost on restart");
            Arc::new(MemoryRecipeRepository::new())
        }
    };

    let app = routes::router(AppState::new(recipes))
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("recipe-box-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
