//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (binary only)
//! 2. `TraceLayer` (request span: method, path, status, latency)
//! 3. Request ID (add unique ID to each request, recorded on the span)
//! 4. Security headers (`nosniff`, `DENY`, `no-referrer`, CSP)
//! 5. Error logging (log code, status and path of error responses)

pub mod error_log;
pub mod request_id;
pub mod security_headers;

pub use error_log::error_log_middleware;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
