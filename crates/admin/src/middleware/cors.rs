//! CORS headers for the storefront-facing API.
//!
//! The storefront runs on a different origin and calls the checkout API from
//! the browser. Every response from the API router carries the same
//! permissive headers, including error responses, so the browser can read
//! the status and body.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::Response,
};

/// `Access-Control-Allow-Origin` value.
pub const ALLOW_ORIGIN: &str = "*";
/// `Access-Control-Allow-Methods` value.
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
/// `Access-Control-Allow-Headers` value.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Add CORS headers to all responses.
pub async fn cors_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );

    response
}
