//! HTTP tests for the order detail page against a local admin API.

#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    extract::Path,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tienda_admin::{admin_api::AdminApiClient, config::AdminApiConfig, state::AppState};
use tienda_admin::admin_api::{OrderLoadError, OrderLoadErrorKind};
use tienda_core::OrderId;
use tower::ServiceExt;

use common::{FakeCheckoutProvider, body_text, test_config};

/// Admin API stand-in keyed by order id.
async fn mock_order(Path(order_id): Path<String>) -> Response {
    match order_id.as_str() {
        "ord_full" => Json(json!({
            "orderDetails": {
                "_id": "ord_full",
                "shippingAddress": {
                    "street": "1 Main St",
                    "city": "Springfield",
                    "state": "IL",
                    "postalCode": "62701",
                    "country": "US"
                },
                "totalAmount": 40,
                "shippingRate": "shr_1QonF4Klmp1I0elyltivFstq",
                "products": [
                    {"product": {"_id": "p1", "title": "Shirt"}, "color": "Blue", "size": "M", "quantity": 2},
                    {"product": {"_id": "p2", "title": "Hat"}, "quantity": 1}
                ]
            },
            "customer": {"name": "Ada Lovelace", "clerkId": "user_2abc"}
        }))
        .into_response(),
        "ord_bare" => Json(json!({
            "orderDetails": {"_id": "ord_bare"},
            "customer": {"name": "Grace Hopper"}
        }))
        .into_response(),
        "ord_unpopulated" => Json(json!({
            "orderDetails": {
                "_id": "ord_unpopulated",
                "products": [{"product": "65f0c2a1", "quantity": 1}]
            },
            "customer": {"name": "Ada Lovelace"}
        }))
        .into_response(),
        "ord_no_id" => Json(json!({
            "orderDetails": {"totalAmount": 40},
            "customer": {"name": "Ada Lovelace"}
        }))
        .into_response(),
        "ord_no_customer" => Json(json!({
            "orderDetails": {"_id": "ord_no_customer"}
        }))
        .into_response(),
        "ord_broken" => (StatusCode::OK, "<html>oops</html>").into_response(),
        "ord_down" => (StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable 503").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "Order not found"}))).into_response(),
    }
}

async fn admin_api() -> String {
    common::spawn_server(Router::new().route("/api/orders/{order_id}", get(mock_order))).await
}

async fn order_page(admin_api_base: &str, path: &str) -> (StatusCode, String) {
    let state = AppState::with_checkout_provider(
        test_config(admin_api_base, "http://127.0.0.1:9"),
        Arc::new(FakeCheckoutProvider::default()),
    );
    let app = tienda_admin::app(state);

    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    (status, body_text(response).await)
}

#[tokio::test]
async fn test_order_page_renders_details() {
    let base = admin_api().await;
    let (status, html) = order_page(&base, "/orders/ord_full").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("ord_full"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("1 Main St, Springfield, IL, 62701, US"));
    assert!(html.contains("$40.00"));
    assert!(html.contains("shr_1QonF4Klmp1I0elyltivFstq"));
    assert!(html.contains("Shirt"));
    assert!(html.contains("Hat"));
    assert!(html.contains(r#"name="product""#));
    assert!(!html.contains("Error loading order details."));
}

#[tokio::test]
async fn test_order_without_address_renders_placeholders() {
    let base = admin_api().await;
    let (status, html) = order_page(&base, "/orders/ord_bare").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Grace Hopper"));
    assert!(html.contains("N/A, N/A, N/A, N/A, N/A"));
    assert!(html.contains("No products in this order."));
}

#[tokio::test]
async fn test_order_items_search() {
    let base = admin_api().await;
    let (_, html) = order_page(&base, "/orders/ord_full?product=hat").await;

    assert!(html.contains("Hat"));
    assert!(!html.contains("Shirt"));
    assert!(html.contains("1 of 2"));
}

#[tokio::test]
async fn test_repeated_search_parameter_renders_unfiltered() {
    let base = admin_api().await;
    let (status, html) = order_page(&base, "/orders/ord_full?product=hat&product=shirt").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Hat"));
    assert!(html.contains("Shirt"));
    assert!(!html.contains("Error loading order details."));
}

#[tokio::test]
async fn test_unpopulated_product_still_renders() {
    let base = admin_api().await;
    let (status, html) = order_page(&base, "/orders/ord_unpopulated").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("ord_unpopulated"));
    assert!(html.contains("Ada Lovelace"));
    assert!(!html.contains("Error loading order details."));
}

#[tokio::test]
async fn test_order_without_id_still_renders() {
    let base = admin_api().await;
    let (status, html) = order_page(&base, "/orders/ord_no_id").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("$40.00"));
    assert!(html.contains("Ada Lovelace"));
    assert!(!html.contains("Error loading order details."));
}

#[tokio::test]
async fn test_upstream_error_status_renders_generic_error() {
    let base = admin_api().await;

    for path in ["/orders/ord_down", "/orders/ord_missing"] {
        let (status, html) = order_page(&base, path).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Error loading order details."));
        assert!(!html.contains("503"));
        assert!(!html.contains("404"));
        assert!(!html.contains("Order not found"));
    }
}

#[tokio::test]
async fn test_malformed_payload_renders_generic_error() {
    let base = admin_api().await;

    for path in ["/orders/ord_no_customer", "/orders/ord_broken"] {
        let (_, html) = order_page(&base, path).await;

        assert!(html.contains("Error loading order details."));
        assert!(!html.contains("ord_no_customer"));
    }
}

#[tokio::test]
async fn test_unreachable_admin_api_renders_generic_error() {
    let (status, html) = order_page("http://127.0.0.1:9", "/orders/ord_full").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Error loading order details."));
}

#[tokio::test]
async fn test_order_page_security_headers() {
    let base = admin_api().await;
    let state = AppState::with_checkout_provider(
        test_config(&base, "http://127.0.0.1:9"),
        Arc::new(FakeCheckoutProvider::default()),
    );

    let response = tienda_admin::app(state)
        .oneshot(
            Request::builder()
                .uri("/orders/ord_full")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_client_error_kinds() {
    let base = admin_api().await;
    let client = AdminApiClient::new(&AdminApiConfig { base_url: base });

    let err = client.fetch_order(&OrderId::new("ord_down")).await.unwrap_err();
    assert!(matches!(err, OrderLoadError::Status(StatusCode::SERVICE_UNAVAILABLE)));
    assert_eq!(err.kind(), OrderLoadErrorKind::Fetch);

    let err = client
        .fetch_order(&OrderId::new("ord_no_customer"))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderLoadError::MissingCustomer));
    assert_eq!(err.kind(), OrderLoadErrorKind::DataShape);

    let details = client.fetch_order(&OrderId::new("ord_full")).await.unwrap();
    assert_eq!(details.order.products.map(|p| p.len()), Some(2));
}
