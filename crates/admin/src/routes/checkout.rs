//! Checkout session API used by the storefront.
//!
//! The storefront posts the shopper's cart and receives a Stripe Checkout
//! Session to redirect to. CORS headers are added by the router layer, so
//! they are present on errors as well.

use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tienda_core::types::lenient::is_present;
use tienda_core::{CartItem, CheckoutCustomer};
use tracing::instrument;

use crate::error::CheckoutError;
use crate::state::AppState;
use crate::stripe::{CheckoutSession, CheckoutSessionParams};

/// Raw request body.
///
/// Members stay untyped until their presence is checked, so a missing cart
/// is a client error while a malformed one is a server-side failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutPayload {
    #[serde(default)]
    cart_items: Option<Value>,
    #[serde(default)]
    customer: Option<Value>,
}

/// A validated checkout request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub cart_items: Vec<CartItem>,
    pub customer: CheckoutCustomer,
}

impl CheckoutRequest {
    /// Parse a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingData` if `cartItems` or `customer` is
    /// absent, `null`, `false`, zero or an empty string, and `CheckoutError::MalformedBody` if the body is not
    /// a JSON object or either member has the wrong shape.
    pub fn parse(body: &[u8]) -> Result<Self, CheckoutError> {
        let payload: CheckoutPayload = serde_json::from_slice(body)?;

        let (Some(cart_items), Some(customer)) = (
            payload.cart_items.filter(is_present),
            payload.customer.filter(is_present),
        ) else {
            return Err(CheckoutError::MissingData);
        };

        Ok(Self {
            cart_items: serde_json::from_value(cart_items)?,
            customer: serde_json::from_value(customer)?,
        })
    }
}

/// Create a Stripe Checkout Session for the posted cart.
///
/// # Errors
///
/// Returns 400 when the cart or customer is missing and 500 for every other
/// failure.
#[instrument(skip(state, body))]
pub async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CheckoutSession>, CheckoutError> {
    let request = CheckoutRequest::parse(&body)?;

    let params = CheckoutSessionParams::from_cart(
        &request.cart_items,
        &request.customer,
        &state.config().checkout,
    )?;

    let session = state.checkout().create_session(&params).await?;

    tracing::info!(
        session_id = %session.id,
        line_items = params.line_items.len(),
        "Checkout session created"
    );

    Ok(Json(session))
}

/// Answer a CORS preflight with an empty JSON object.
pub async fn preflight() -> Json<Value> {
    Json(json!({}))
}
