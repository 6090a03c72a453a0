//! Cart payloads posted by the storefront at checkout.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ClerkUserId, ProductId};
use super::price::{CurrencyCode, Price};

/// One entry of the shopper's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub item: CartProduct,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CartItem {
    /// Selected size, ignoring blank values.
    #[must_use]
    pub fn size(&self) -> Option<&str> {
        non_blank(self.size.as_deref())
    }

    /// Selected color, ignoring blank values.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        non_blank(self.color.as_deref())
    }
}

/// The product referenced by a cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub title: String,
    /// Unit price in dollars.
    pub price: Decimal,
}

impl CartProduct {
    /// Unit price in the storefront currency.
    #[must_use]
    pub const fn unit_price(&self, currency_code: CurrencyCode) -> Price {
        Price::new(self.price, currency_code)
    }
}

/// The shopper placing the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCustomer {
    #[serde(default)]
    pub clerk_id: Option<ClerkUserId>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
