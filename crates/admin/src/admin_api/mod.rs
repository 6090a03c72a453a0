//! Admin API client for order data.
//!
//! The admin dashboard owns orders and customers; this crate only reads them
//! through `GET /api/orders/{orderId}`.

mod client;
mod error;

pub use client::AdminApiClient;
pub use error::{OrderLoadError, OrderLoadErrorKind};
