//! Checkout session parameters.
//!
//! [`CheckoutSessionParams`] is the request body for
//! `POST /v1/checkout/sessions`. It is built from the storefront cart and
//! encoded in Stripe's bracketed form notation by [`CheckoutSessionParams::to_form`].

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tienda_core::{
    CartItem, CheckoutCustomer, ClerkUserId, PriceError, ProductId, ShippingRateId,
};

use crate::config::CheckoutConfig;

/// Metadata key carrying the admin product id.
const METADATA_PRODUCT_ID: &str = "productId";
const METADATA_SIZE: &str = "size";
const METADATA_COLOR: &str = "color";

/// A cart entry that cannot be turned into a Stripe line item.
#[derive(Debug, Error)]
#[error("invalid price for product {product_id}: {source}")]
pub struct InvalidLineItem {
    pub product_id: ProductId,
    #[source]
    pub source: PriceError,
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    Card,
}

impl PaymentMethodType {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
        }
    }
}

/// Session mode. Only one-time payments are sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMode {
    Payment,
}

impl CheckoutMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingAddressCollection {
    pub allowed_countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingOption {
    pub shipping_rate: ShippingRateId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductData {
    pub name: String,
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceData {
    pub currency: String,
    pub product_data: ProductData,
    /// Unit price in minor units (cents).
    pub unit_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub price_data: PriceData,
    pub quantity: u32,
}

/// Parameters for creating a Stripe Checkout Session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSessionParams {
    pub payment_method_types: Vec<PaymentMethodType>,
    pub mode: CheckoutMode,
    pub shipping_address_collection: ShippingAddressCollection,
    pub shipping_options: Vec<ShippingOption>,
    pub line_items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_reference_id: Option<ClerkUserId>,
    pub success_url: String,
    pub cancel_url: String,
}

impl LineItem {
    /// Build a line item from a cart entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLineItem` if the price cannot be expressed in cents.
    pub fn from_cart_item(
        cart_item: &CartItem,
        config: &CheckoutConfig,
    ) -> Result<Self, InvalidLineItem> {
        let product = &cart_item.item;
        let unit_amount = product
            .unit_price(config.currency)
            .to_minor_units()
            .map_err(|source| InvalidLineItem {
                product_id: product.id.clone(),
                source,
            })?;

        let mut metadata = BTreeMap::new();
        metadata.insert(METADATA_PRODUCT_ID.to_string(), product.id.to_string());
        if let Some(size) = cart_item.size() {
            metadata.insert(METADATA_SIZE.to_string(), size.to_string());
        }
        if let Some(color) = cart_item.color() {
            metadata.insert(METADATA_COLOR.to_string(), color.to_string());
        }

        Ok(Self {
            price_data: PriceData {
                currency: config.currency.as_stripe_str().to_string(),
                product_data: ProductData {
                    name: product.title.clone(),
                    metadata,
                },
                unit_amount,
            },
            quantity: cart_item.quantity,
        })
    }
}

impl CheckoutSessionParams {
    /// Build session params for a cart.
    ///
    /// One line item is produced per cart entry, in cart order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLineItem` for the first entry whose price cannot be
    /// converted to cents.
    pub fn from_cart(
        cart_items: &[CartItem],
        customer: &CheckoutCustomer,
        config: &CheckoutConfig,
    ) -> Result<Self, InvalidLineItem> {
        let line_items = cart_items
            .iter()
            .map(|item| LineItem::from_cart_item(item, config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            payment_method_types: vec![PaymentMethodType::Card],
            mode: CheckoutMode::Payment,
            shipping_address_collection: ShippingAddressCollection {
                allowed_countries: config.allowed_countries.clone(),
            },
            shipping_options: config
                .shipping_rates
                .iter()
                .map(|rate| ShippingOption {
                    shipping_rate: rate.clone(),
                })
                .collect(),
            line_items,
            client_reference_id: customer.clerk_id.clone(),
            success_url: config.success_url(),
            cancel_url: config.cancel_url(),
        })
    }

    /// Encode as `application/x-www-form-urlencoded` pairs using Stripe's
    /// bracket notation (`line_items[0][price_data][currency]=usd`).
    #[must_use]
    pub fn to_form(&self) -> Vec<(String, String)> {
        let mut form = Vec::new();

        for (i, method) in self.payment_method_types.iter().enumerate() {
            form.push((
                format!("payment_method_types[{i}]"),
                method.as_str().to_string(),
            ));
        }
        form.push(("mode".to_string(), self.mode.as_str().to_string()));

        for (i, country) in self
            .shipping_address_collection
            .allowed_countries
            .iter()
            .enumerate()
        {
            form.push((
                format!("shipping_address_collection[allowed_countries][{i}]"),
                country.clone(),
            ));
        }

        for (i, option) in self.shipping_options.iter().enumerate() {
            form.push((
                format!("shipping_options[{i}][shipping_rate]"),
                option.shipping_rate.to_string(),
            ));
        }

        for (i, item) in self.line_items.iter().enumerate() {
            let prefix = format!("line_items[{i}]");
            let price = &item.price_data;
            form.push((
                format!("{prefix}[price_data][currency]"),
                price.currency.clone(),
            ));
            form.push((
                format!("{prefix}[price_data][product_data][name]"),
                price.product_data.name.clone(),
            ));
            for (key, value) in &price.product_data.metadata {
                form.push((
                    format!("{prefix}[price_data][product_data][metadata][{key}]"),
                    value.clone(),
                ));
            }
            form.push((
                format!("{prefix}[price_data][unit_amount]"),
                price.unit_amount.to_string(),
            ));
            form.push((format!("{prefix}[quantity]"), item.quantity.to_string()));
        }

        if let Some(reference) = &self.client_reference_id {
            form.push(("client_reference_id".to_string(), reference.to_string()));
        }
        form.push(("success_url".to_string(), self.success_url.clone()));
        form.push(("cancel_url".to_string(), self.cancel_url.clone()));

        form
    }
}
