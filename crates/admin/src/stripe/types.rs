//! Stripe API response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Stripe Checkout Session object.
///
/// Only the fields this crate reads are typed; everything else Stripe sends
/// is kept in `extra` so the object can be handed back to the storefront
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Session id (`cs_...`).
    pub id: String,
    /// Hosted checkout page URL.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error envelope returned by Stripe on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}
