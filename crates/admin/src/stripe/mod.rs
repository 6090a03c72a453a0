//! Stripe Checkout integration.
//!
//! This module provides:
//! - [`CheckoutSessionParams`] built from a storefront cart
//! - [`StripeClient`] for creating hosted checkout sessions
//! - [`CheckoutProvider`], the seam handlers depend on so tests can swap
//!   the payment provider out
//!
//! # Flow
//!
//! 1. The storefront posts its cart to `/api/checkout`
//! 2. The cart is converted to session params (prices in cents)
//! 3. Stripe creates the session and returns its hosted page URL
//! 4. The storefront redirects the shopper to that URL

mod client;
mod error;
mod session;
mod types;

use async_trait::async_trait;

pub use client::StripeClient;
pub use error::StripeError;
pub use session::{
    CheckoutMode, CheckoutSessionParams, InvalidLineItem, LineItem, PaymentMethodType, PriceData,
    ProductData, ShippingAddressCollection, ShippingOption,
};
pub use types::CheckoutSession;

/// Creates checkout sessions with a payment provider.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a checkout session from fully built params.
    ///
    /// # Errors
    ///
    /// Returns `StripeError` if the provider rejects the request or cannot
    /// be reached.
    async fn create_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, StripeError>;
}

#[async_trait]
impl CheckoutProvider for StripeClient {
    async fn create_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, StripeError> {
        self.create_checkout_session(params).await
    }
}
