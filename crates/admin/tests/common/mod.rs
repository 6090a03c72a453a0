//! Shared helpers for admin HTTP tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Response};
use secrecy::SecretString;
use tienda_admin::config::{AdminApiConfig, AdminConfig, CheckoutConfig, StripeConfig};
use tienda_admin::state::AppState;
use tienda_admin::stripe::{CheckoutProvider, CheckoutSession, CheckoutSessionParams, StripeError};

pub const STORE_URL: &str = "https://shop.example.com";
pub const TEST_SECRET_KEY: &str = "sk_test_51Hx7kLmQ2vR9tYpZ3wN8cB4d";

/// Config pointing at the given admin API and Stripe base URLs.
pub fn test_config(admin_api_base: &str, stripe_api_base: &str) -> AdminConfig {
    AdminConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        admin_api: AdminApiConfig {
            base_url: admin_api_base.to_string(),
        },
        stripe: StripeConfig {
            secret_key: SecretString::from(TEST_SECRET_KEY),
            api_base: stripe_api_base.to_string(),
        },
        checkout: CheckoutConfig::with_defaults(STORE_URL),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 0.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Read a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Checkout provider that records params instead of calling Stripe.
#[derive(Default)]
pub struct FakeCheckoutProvider {
    fail: bool,
    calls: Mutex<Vec<CheckoutSessionParams>>,
}

impl FakeCheckoutProvider {
    /// A provider whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Params received so far.
    pub fn calls(&self) -> Vec<CheckoutSessionParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutProvider for FakeCheckoutProvider {
    async fn create_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, StripeError> {
        self.calls.lock().unwrap().push(params.clone());

        if self.fail {
            return Err(StripeError::Api {
                status: 500,
                message: "An unknown error occurred".to_string(),
            });
        }

        Ok(serde_json::from_value(serde_json::json!({
            "id": "cs_test_123",
            "object": "checkout.session",
            "url": "https://checkout.stripe.com/c/pay/cs_test_123",
            "client_reference_id": params.client_reference_id,
        }))
        .unwrap())
    }
}

/// App state backed by `provider`, with an admin API that is never called.
pub fn checkout_state(provider: Arc<FakeCheckoutProvider>) -> AppState {
    AppState::with_checkout_provider(
        test_config("http://127.0.0.1:9", "http://127.0.0.1:9"),
        provider,
    )
}
