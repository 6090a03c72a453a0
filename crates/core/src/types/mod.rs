//! Core types for Tienda.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod lenient;
pub mod order;
pub mod price;

pub use cart::{CartItem, CartProduct, CheckoutCustomer};
pub use id::*;
pub use order::{
    Customer, Order, OrderDetails, OrderProduct, ProductRef, ProductSummary, ShippingAddress,
};
pub use price::{CurrencyCode, Price, PriceError};
