//! Admin API REST client.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tienda_core::types::lenient::is_present;
use tienda_core::{Customer, Order, OrderDetails, OrderId};
use tracing::{debug, instrument};

use super::error::OrderLoadError;
use crate::config::AdminApiConfig;

/// Response body of `GET /api/orders/{orderId}`.
///
/// Both members are kept untyped until their presence is checked so that a
/// missing object and a malformed one are reported differently.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderEnvelope {
    #[serde(default)]
    order_details: Option<Value>,
    #[serde(default)]
    customer: Option<Value>,
}

/// Read-only client for the admin dashboard API.
#[derive(Debug, Clone)]
pub struct AdminApiClient {
    client: Client,
    base_url: String,
}

impl AdminApiClient {
    /// Create a new admin API client.
    #[must_use]
    pub fn new(config: &AdminApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// URL of an order document.
    #[must_use]
    pub fn order_url(&self, order_id: &OrderId) -> String {
        format!(
            "{}/api/orders/{}",
            self.base_url,
            urlencoding::encode(order_id.as_str())
        )
    }

    /// Fetch an order and the customer who placed it.
    ///
    /// # Errors
    ///
    /// Returns `OrderLoadError` if the request fails, the admin API responds
    /// with a non-success status, or the body lacks either object.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn fetch_order(&self, order_id: &OrderId) -> Result<OrderDetails, OrderLoadError> {
        let response = self.client.get(self.order_url(order_id)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrderLoadError::Status(status));
        }

        let body = response.bytes().await?;
        let details = parse_order_details(&body)?;

        debug!(
            products = details.order.products.as_ref().map_or(0, Vec::len),
            "Order loaded"
        );

        Ok(details)
    }
}

/// Parse and validate an order response body.
fn parse_order_details(body: &[u8]) -> Result<OrderDetails, OrderLoadError> {
    let envelope: OrderEnvelope =
        serde_json::from_slice(body).map_err(|e| OrderLoadError::InvalidBody(e.to_string()))?;

    let order = envelope
        .order_details
        .filter(is_present)
        .ok_or(OrderLoadError::MissingOrderDetails)?;
    let customer = envelope
        .customer
        .filter(is_present)
        .ok_or(OrderLoadError::MissingCustomer)?;

    let order: Order =
        serde_json::from_value(order).map_err(|e| OrderLoadError::InvalidBody(e.to_string()))?;
    let customer: Customer = serde_json::from_value(customer)
        .map_err(|e| OrderLoadError::InvalidBody(e.to_string()))?;

    Ok(OrderDetails { order, customer })
}
