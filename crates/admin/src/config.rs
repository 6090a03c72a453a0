//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_DASHBOARD_URL` - Base URL of the admin API serving `/api/orders/{id}`
//! - `ECOMMERCE_STORE_URL` - Public storefront URL used for checkout redirects
//! - `STRIPE_SECRET_KEY` - Stripe secret API key (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `STRIPE_API_BASE` - Stripe API base URL (default: <https://api.stripe.com/v1>)
//! - `CHECKOUT_SHIPPING_RATES` - Comma-separated Stripe shipping rate ids
//! - `CHECKOUT_ALLOWED_COUNTRIES` - Comma-separated ISO country codes (default: US,CA)
//! - `CHECKOUT_CURRENCY` - Currency for line items and order totals: USD, CAD, EUR or GBP (default: USD)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 1.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use tienda_core::{CurrencyCode, ShippingRateId};
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;
const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// Shipping rates offered at checkout unless overridden.
pub const DEFAULT_SHIPPING_RATES: &[&str] =
    &["shr_1QonF4Klmp1I0elyltivFstq", "shr_1Qon7MKlmp1I0ely6Qz2JOXw"];

/// Countries Stripe may collect a shipping address for unless overridden.
pub const DEFAULT_ALLOWED_COUNTRIES: &[&str] = &["US", "CA"];

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Admin API (order data) configuration
    pub admin_api: AdminApiConfig,
    /// Stripe API configuration
    pub stripe: StripeConfig,
    /// Checkout session settings
    pub checkout: CheckoutConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Admin API configuration.
#[derive(Debug, Clone)]
pub struct AdminApiConfig {
    /// Base URL without trailing slash (e.g., `https://admin.example.com`)
    pub base_url: String,
}

/// Stripe API configuration.
///
/// Implements `Debug` manually to redact the secret key.
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (HIGH PRIVILEGE - can create charges)
    pub secret_key: SecretString,
    /// API base URL without trailing slash
    pub api_base: String,
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Fixed parameters of every checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Public storefront URL without trailing slash
    pub store_url: String,
    /// Stripe shipping rates offered to the shopper
    pub shipping_rates: Vec<ShippingRateId>,
    /// ISO country codes accepted for the shipping address
    pub allowed_countries: Vec<String>,
    /// Currency every line item is charged in
    pub currency: CurrencyCode,
}

impl CheckoutConfig {
    /// Checkout settings with the default shipping rates and countries.
    #[must_use]
    pub fn with_defaults(store_url: &str) -> Self {
        Self {
            store_url: store_url.trim_end_matches('/').to_string(),
            shipping_rates: DEFAULT_SHIPPING_RATES
                .iter()
                .map(|id| ShippingRateId::new(*id))
                .collect(),
            allowed_countries: DEFAULT_ALLOWED_COUNTRIES
                .iter()
                .map(ToString::to_string)
                .collect(),
            currency: CurrencyCode::USD,
        }
    }

    /// Where Stripe sends the shopper after paying.
    #[must_use]
    pub fn success_url(&self) -> String {
        format!("{}/payment_success", self.store_url)
    }

    /// Where Stripe sends the shopper after abandoning payment.
    #[must_use]
    pub fn cancel_url(&self) -> String {
        format!("{}/cart", self.store_url)
    }

    fn from_env() -> Result<Self, ConfigError> {
        let store_url = get_base_url("ECOMMERCE_STORE_URL")?;
        let mut config = Self::with_defaults(&store_url);

        if let Some(rates) = get_list("CHECKOUT_SHIPPING_RATES")? {
            config.shipping_rates = rates.into_iter().map(ShippingRateId::from).collect();
        }
        if let Some(countries) = get_list("CHECKOUT_ALLOWED_COUNTRIES")? {
            config.allowed_countries = countries
                .into_iter()
                .map(|c| c.to_ascii_uppercase())
                .collect();
        }
        if let Some(code) = get_optional_env("CHECKOUT_CURRENCY") {
            config.currency = parse_currency("CHECKOUT_CURRENCY", &code)?;
        }

        Ok(config)
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;

        let admin_api = AdminApiConfig {
            base_url: get_base_url("ADMIN_DASHBOARD_URL")?,
        };
        let stripe = StripeConfig::from_env()?;
        let checkout = CheckoutConfig::from_env()?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            admin_api,
            stripe,
            checkout,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl StripeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_base = match get_optional_env("STRIPE_API_BASE") {
            Some(value) => parse_base_url("STRIPE_API_BASE", &value)?,
            None => DEFAULT_STRIPE_API_BASE.to_string(),
        };

        Ok(Self {
            secret_key: get_validated_secret("STRIPE_SECRET_KEY")?,
            api_base,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a required absolute http(s) URL, normalized without a trailing slash.
fn get_base_url(key: &str) -> Result<String, ConfigError> {
    let value = get_required_env(key)?;
    parse_base_url(key, &value)
}

fn parse_base_url(key: &str, value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn parse_currency(key: &str, value: &str) -> Result<CurrencyCode, ConfigError> {
    CurrencyCode::from_code(value).ok_or_else(|| {
        ConfigError::InvalidEnvVar(key.to_string(), format!("unsupported currency '{value}'"))
    })
}

/// Get an optional comma-separated list. An empty list is an error.
fn get_list(key: &str) -> Result<Option<Vec<String>>, ConfigError> {
    let Some(value) = get_optional_env(key) else {
        return Ok(None);
    };

    let items = split_list(&value);
    if items.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must contain at least one value".to_string(),
        ));
    }

    Ok(Some(items))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Real API keys are long random strings
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use the key issued by the provider."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}
