//! Stripe REST API client.
//!
//! Talks to the Stripe API directly with `reqwest`. Requests are
//! form-encoded and authenticated with the secret key as a bearer token.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, instrument};

use super::error::StripeError;
use super::session::CheckoutSessionParams;
use super::types::{CheckoutSession, ErrorResponse};
use crate::config::StripeConfig;

/// Stripe API client for creating checkout sessions.
#[derive(Clone)]
pub struct StripeClient {
    /// HTTP client.
    client: Client,
    /// Secret key for authentication.
    secret_key: SecretString,
    /// API base URL without trailing slash.
    api_base: String,
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("secret_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl StripeClient {
    /// Create a new Stripe client.
    #[must_use]
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            client: Client::new(),
            secret_key: config.secret_key.clone(),
            api_base: config.api_base.clone(),
        }
    }

    /// Create a hosted Checkout Session.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, Stripe rejects it, or the
    /// response is not a session object.
    #[instrument(skip(self, params), fields(line_items = params.line_items.len()))]
    pub async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, StripeError> {
        let response = self
            .client
            .post(format!("{}/checkout/sessions", self.api_base))
            .bearer_auth(self.secret_key.expose_secret())
            .form(&params.to_form())
            .send()
            .await
            .map_err(|e| StripeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (message, kind) = serde_json::from_str::<ErrorResponse>(&body).map_or_else(
                |_| (body.clone(), None),
                |e| (e.error.message.unwrap_or_default(), e.error.kind),
            );

            error!(
                status = status.as_u16(),
                error_type = ?kind,
                message = %message,
                "Stripe API error creating checkout session"
            );
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let session: CheckoutSession = response
            .json()
            .await
            .map_err(|e| StripeError::Response(e.to_string()))?;

        debug!(session_id = %session.id, "Checkout session created");

        Ok(session)
    }
}
