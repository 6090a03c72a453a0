//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET     /health              - Health check
//!
//! # Orders (read from the admin API)
//! GET     /orders/{order_id}   - Order detail (?product= filters items)
//!
//! # Checkout (called cross-origin by the storefront)
//! POST    /api/checkout        - Create a Stripe Checkout Session
//! OPTIONS /api/checkout        - CORS preflight
//! ```

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};

use crate::middleware::{cors_headers_middleware, security_headers_middleware};
use crate::state::AppState;

pub mod checkout;
pub mod orders;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    let pages = Router::new()
        .route("/orders/{order_id}", get(orders::show))
        .layer(from_fn(security_headers_middleware));

    let api = Router::new()
        .route(
            "/api/checkout",
            post(checkout::create_session).options(checkout::preflight),
        )
        .layer(from_fn(cors_headers_middleware));

    Router::new()
        .route("/health", get(health))
        .merge(pages)
        .merge(api)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
