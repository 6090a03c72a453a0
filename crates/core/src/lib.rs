//! Tienda Core - Shared types library.
//!
//! This crate provides the types exchanged by the Tienda admin binary:
//! - order and customer documents read from the admin API
//! - cart payloads posted by the storefront at checkout
//! - prices and their conversion to integer minor units
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no HTTP clients. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype identifiers, prices, orders and cart items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
