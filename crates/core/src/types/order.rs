//! Order and customer documents owned by the admin API.
//!
//! These mirror the JSON the admin dashboard serves from
//! `GET /api/orders/{orderId}`. Every field is optional and read leniently:
//! older orders were written before some fields existed, and a field of an
//! unexpected type reads as absent. Callers decide how to present the gaps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ClerkUserId, OrderId, ProductId, ShippingRateId};
use super::lenient::{lenient, lenient_list};

/// A placed order as stored by the admin backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<OrderId>,
    #[serde(default, deserialize_with = "lenient")]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub shipping_rate: Option<ShippingRateId>,
    /// Purchased products; entries that are not objects are dropped.
    #[serde(default, deserialize_with = "lenient_list")]
    pub products: Option<Vec<OrderProduct>>,
}

/// Postal address captured by the payment provider at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default, deserialize_with = "lenient")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
}

/// One purchased product within an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    #[serde(default, deserialize_with = "lenient")]
    pub product: Option<ProductRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub quantity: Option<u32>,
}

/// The product an order line points at.
///
/// The admin API populates the reference into a document, but lines whose
/// product was never populated (or was deleted) carry only the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Populated(ProductSummary),
    Unpopulated(ProductId),
}

impl ProductRef {
    /// Product title, available only for populated references.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Populated(summary) => summary.title.as_deref(),
            Self::Unpopulated(_) => None,
        }
    }
}

/// The subset of a product document shown alongside an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<ProductId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

/// The customer who placed an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub clerk_id: Option<ClerkUserId>,
}

/// An order together with the customer who placed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub order: Order,
    pub customer: Customer,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_order_full_document() {
        let json = r#"{
            "_id": "ord_1",
            "shippingAddress": {
                "street": "1 Main St",
                "city": "Toronto",
                "state": "ON",
                "postalCode": "M5V",
                "country": "CA"
            },
            "totalAmount": 40.5,
            "shippingRate": "shr_1QonF4Klmp1I0elyltivFstq",
            "products": [
                {"product": {"_id": "p1", "title": "Shirt"}, "color": "red", "size": "M", "quantity": 2}
            ]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id.unwrap().as_str(), "ord_1");
        let address = order.shipping_address.unwrap();
        assert_eq!(address.postal_code.as_deref(), Some("M5V"));
        assert_eq!(order.total_amount, Some(Decimal::new(405, 1)));
        let products = order.products.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, Some(2));
        assert_eq!(
            products[0].product.as_ref().and_then(ProductRef::title),
            Some("Shirt")
        );
    }

    #[test]
    fn test_order_minimal_document() {
        let order: Order = serde_json::from_str(r#"{"_id": "ord_2"}"#).unwrap();
        assert!(order.shipping_address.is_none());
        assert!(order.total_amount.is_none());
        assert!(order.shipping_rate.is_none());
        assert!(order.products.is_none());
    }

    #[test]
    fn test_order_null_fields() {
        let json = r#"{"_id": "ord_3", "shippingAddress": null, "products": null, "shippingRate": null}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert!(order.shipping_address.is_none());
        assert!(order.products.is_none());
    }

    #[test]
    fn test_customer_document() {
        let customer: Customer =
            serde_json::from_str(r#"{"name": "Ada", "clerkId": "user_1", "email": "ada@example.com"}"#)
                .unwrap();
        assert_eq!(customer.name.as_deref(), Some("Ada"));
        assert_eq!(customer.clerk_id.unwrap().as_str(), "user_1");
    }

    #[test]
    fn test_order_without_id() {
        let order: Order = serde_json::from_str(r#"{"totalAmount": 40}"#).unwrap();
        assert!(order.id.is_none());
        assert_eq!(order.total_amount, Some(Decimal::from(40)));
    }

    #[test]
    fn test_unpopulated_product_reference() {
        let json = r#"{"_id": "ord_4", "products": [{"product": "65f0c2a1", "quantity": 1}]}"#;
        let order: Order = serde_json::from_str(json).unwrap();

        let products = order.products.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(
            products[0].product,
            Some(ProductRef::Unpopulated(ProductId::new("65f0c2a1")))
        );
        assert_eq!(products[0].product.as_ref().and_then(ProductRef::title), None);
        assert_eq!(products[0].quantity, Some(1));
    }

    #[test]
    fn test_mistyped_fields_read_as_absent() {
        let json = r#"{
            "_id": 17,
            "shippingAddress": "pending",
            "totalAmount": "forty",
            "shippingRate": ["shr_1"],
            "products": [
                "p1",
                {"product": 5, "color": 3, "size": "L", "quantity": "two"}
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert!(order.id.is_none());
        assert!(order.shipping_address.is_none());
        assert!(order.total_amount.is_none());
        assert!(order.shipping_rate.is_none());

        let products = order.products.unwrap();
        assert_eq!(products.len(), 1);
        assert!(products[0].product.is_none());
        assert!(products[0].color.is_none());
        assert_eq!(products[0].size.as_deref(), Some("L"));
        assert!(products[0].quantity.is_none());
    }

    #[test]
    fn test_products_not_a_list() {
        let order: Order = serde_json::from_str(r#"{"products": {"0": {}}}"#).unwrap();
        assert!(order.products.is_none());
    }
}
