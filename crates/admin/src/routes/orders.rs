//! Order detail page.
//!
//! Renders one order fetched from the admin API. Any failure to load the
//! order collapses to a single generic line; nothing from a partially loaded
//! order is ever shown.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tienda_core::{
    CurrencyCode, OrderDetails, OrderId, OrderProduct, Price, ProductRef, ShippingAddress,
};
use tracing::instrument;

use crate::components::{DataTable, DataTableConfig, TableColumn, TableRow};
use crate::state::AppState;

/// Placeholder for any missing order field.
pub const NOT_AVAILABLE: &str = "N/A";

/// The only message shown when an order cannot be loaded.
pub const ORDER_LOAD_ERROR_MESSAGE: &str = "Error loading order details.";

/// Order items table search parameter.
#[derive(Debug, Default, Deserialize)]
pub struct OrderItemsQuery {
    /// Filter items whose product title contains this text.
    pub product: Option<String>,
}

/// Shipping address with every field defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressView {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl AddressView {
    /// Build from an optional address; every absent or blank field becomes `N/A`.
    #[must_use]
    pub fn new(address: Option<&ShippingAddress>) -> Self {
        let field = |get: fn(&ShippingAddress) -> Option<&String>| {
            or_not_available(address.and_then(get).map(String::as_str))
        };

        Self {
            street: field(|a| a.street.as_ref()),
            city: field(|a| a.city.as_ref()),
            state: field(|a| a.state.as_ref()),
            postal_code: field(|a| a.postal_code.as_ref()),
            country: field(|a| a.country.as_ref()),
        }
    }

    /// Single-line display: `street, city, state, postal code, country`.
    #[must_use]
    pub fn line(&self) -> String {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        ]
        .map(String::as_str)
        .join(", ")
    }
}

/// Order detail display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailView {
    pub id: String,
    pub customer_name: String,
    pub shipping_address: AddressView,
    pub total_paid: String,
    pub shipping_rate: String,
}

impl OrderDetailView {
    /// Build the view from a loaded order, showing the total in `currency`.
    #[must_use]
    pub fn new(details: &OrderDetails, currency: CurrencyCode) -> Self {
        let order = &details.order;

        Self {
            id: or_not_available(order.id.as_ref().map(OrderId::as_str)),
            customer_name: details.customer.name.clone().unwrap_or_default(),
            shipping_address: AddressView::new(order.shipping_address.as_ref()),
            total_paid: order
                .total_amount
                .map_or_else(
                    || NOT_AVAILABLE.to_string(),
                    |amount| Price::new(amount, currency).display(),
                ),
            shipping_rate: or_not_available(order.shipping_rate.as_ref().map(|r| r.as_str())),
        }
    }
}

impl TableRow for OrderProduct {
    fn cell(&self, key: &str) -> String {
        match key {
            "product" => or_not_available(self.product.as_ref().and_then(ProductRef::title)),
            "color" => or_not_available(self.color.as_deref()),
            "size" => or_not_available(self.size.as_deref()),
            "quantity" => self
                .quantity
                .map_or_else(|| NOT_AVAILABLE.to_string(), |q| q.to_string()),
            _ => String::new(),
        }
    }
}

/// Build the order items table configuration.
#[must_use]
pub fn order_items_table_config() -> DataTableConfig {
    DataTableConfig::new("order-items", "product")
        .column(TableColumn::new("product", "Product"))
        .column(TableColumn::new("color", "Color"))
        .column(TableColumn::new("size", "Size"))
        .column(TableColumn::new("quantity", "Quantity"))
        .search_placeholder("Search products...")
        .empty_title("No products in this order.")
}

fn or_not_available(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Order detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/show.html")]
pub struct OrderShowTemplate {
    pub order: OrderDetailView,
    /// Order items, rendered by `components/data_table.html`.
    pub table: DataTable,
}

impl OrderShowTemplate {
    /// Build the page, filtering the items table by `product_search`.
    #[must_use]
    pub fn new(
        details: &OrderDetails,
        currency: CurrencyCode,
        product_search: Option<&str>,
    ) -> Self {
        let products = details.order.products.as_deref().unwrap_or_default();

        Self {
            order: OrderDetailView::new(details, currency),
            table: DataTable::build(order_items_table_config(), products, product_search),
        }
    }
}

/// Order load failure template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/error.html")]
pub struct OrderErrorTemplate {
    pub message: &'static str,
}

/// Order detail page handler.
///
/// A query string that does not parse (e.g. a repeated `product`) renders the
/// page unfiltered.
#[instrument(skip(state, query))]
pub async fn show(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    query: Result<Query<OrderItemsQuery>, QueryRejection>,
) -> Response {
    let order_id = OrderId::from(order_id);
    let query = query.map_or_else(
        |rejection| {
            tracing::debug!(error = %rejection, "Ignoring unparseable order items query");
            OrderItemsQuery::default()
        },
        |Query(query)| query,
    );

    match state.admin_api().fetch_order(&order_id).await {
        Ok(details) => OrderShowTemplate::new(
            &details,
            state.config().checkout.currency,
            query.product.as_deref(),
        )
        .into_response(),
        Err(e) => {
            tracing::error!(
                error = %e,
                kind = ?e.kind(),
                order_id = %order_id,
                "Error loading order details"
            );
            OrderErrorTemplate {
                message: ORDER_LOAD_ERROR_MESSAGE,
            }
            .into_response()
        }
    }
}
