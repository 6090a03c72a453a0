//! Tienda Admin library.
//!
//! Server-side glue between the storefront, the admin dashboard API, and
//! Stripe:
//! - Order detail pages rendered from the admin API
//! - Checkout session creation for the storefront (CORS enabled)
//!
//! Exposed as a library so the router can be driven from integration tests.
//!
//! # Security
//!
//! This crate holds the Stripe secret key. It is only ever sent to the
//! configured Stripe API base.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin_api;
pub mod components;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod stripe;

use axum::{Router, middleware::from_fn};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Build the application with its tracing and request ID layers.
///
/// Sentry layers are added by the binary so tests run without a client.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
