//! Error logging middleware.
//!
//! Every error response produced by [`crate::error::AppError`] carries its
//! [`ErrorCode`] in the response extensions. This middleware logs that code
//! with the status, method and request path. It never logs bodies or query
//! strings, so recipe content stays out of the logs.

use axum::{extract::Request, middleware::Next, response::Response};
use recipe_box_core::ErrorCode;

/// Log `api_error` events for error responses.
pub async fn error_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    if let Some(code) = response.extensions().get::<ErrorCode>() {
        let status = response.status().as_u16();
        if response.status().is_server_error() {
            tracing::error!(code = %code, status, method = %method, path = %path, "api_error");
        } else {
            tracing::warn!(code = %code, status, method = %method, path = %path, "api_error");
        }
    }

    response
}
