//! Application state shared across handlers.

use std::sync::Arc;

use crate::admin_api::AdminApiClient;
use crate::config::AdminConfig;
use crate::stripe::{CheckoutProvider, StripeClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and holds only immutable
/// data: configuration and HTTP clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    admin_api: AdminApiClient,
    checkout: Arc<dyn CheckoutProvider>,
}

impl AppState {
    /// Create application state backed by the real Stripe API.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let stripe = StripeClient::new(&config.stripe);
        Self::with_checkout_provider(config, Arc::new(stripe))
    }

    /// Create application state with a custom checkout provider.
    #[must_use]
    pub fn with_checkout_provider(
        config: AdminConfig,
        checkout: Arc<dyn CheckoutProvider>,
    ) -> Self {
        let admin_api = AdminApiClient::new(&config.admin_api);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                admin_api,
                checkout,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the admin API client.
    #[must_use]
    pub fn admin_api(&self) -> &AdminApiClient {
        &self.inner.admin_api
    }

    /// Get the checkout session provider.
    #[must_use]
    pub fn checkout(&self) -> &dyn CheckoutProvider {
        self.inner.checkout.as_ref()
    }
}
