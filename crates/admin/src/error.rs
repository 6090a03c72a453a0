//! Unified error handling with Sentry integration.
//!
//! Checkout handlers return `Result<T, CheckoutError>`. Each variant keeps
//! the precise failure for logs and tests, while clients only ever see one
//! of two fixed messages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::stripe::{InvalidLineItem, StripeError};

/// Body sent when the cart or customer is missing.
pub const NOT_ENOUGH_DATA_MESSAGE: &str = "Not enough data to checkout";

/// Body sent for every server-side checkout failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Checkout failures.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// `cartItems` or `customer` absent from the request.
    #[error("Not enough data to checkout")]
    MissingData,

    /// Request body is not JSON or does not match the cart shape.
    #[error("Malformed checkout payload: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// A cart entry could not be priced.
    #[error("Invalid line item: {0}")]
    InvalidLineItem(#[from] InvalidLineItem),

    /// Stripe rejected the session or could not be reached.
    #[error("Payment provider error: {0}")]
    Payment(#[from] StripeError),
}

impl CheckoutError {
    /// HTTP status reported to the client.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingData => StatusCode::BAD_REQUEST,
            Self::MalformedBody(_) | Self::InvalidLineItem(_) | Self::Payment(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "[checkout_POST] checkout failed"
            );
            return (status, INTERNAL_ERROR_MESSAGE).into_response();
        }

        tracing::warn!(error = %self, "[checkout_POST] rejected checkout request");
        (status, NOT_ENOUGH_DATA_MESSAGE).into_response()
    }
}
