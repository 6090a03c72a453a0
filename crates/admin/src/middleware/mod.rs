//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Request ID (add unique ID to each request)
//! 4. Per-router headers:
//!    - security headers on HTML pages
//!    - CORS headers on the checkout API

pub mod cors;
pub mod request_id;
pub mod security_headers;

pub use cors::cors_headers_middleware;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
