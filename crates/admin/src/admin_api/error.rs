//! Order loading errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Why an order could not be loaded from the admin API.
#[derive(Debug, Error)]
pub enum OrderLoadError {
    /// The request never produced a response.
    #[error("Admin API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The admin API answered with a non-success status.
    #[error("Failed to fetch order details: {0}")]
    Status(StatusCode),

    /// The body was not the expected JSON.
    #[error("Invalid order payload: {0}")]
    InvalidBody(String),

    /// The body had no `orderDetails` object.
    #[error("Invalid order data: missing orderDetails")]
    MissingOrderDetails,

    /// The body had no `customer` object.
    #[error("Invalid order data: missing customer")]
    MissingCustomer,
}

/// Coarse classification of [`OrderLoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderLoadErrorKind {
    /// The upstream fetch failed.
    Fetch,
    /// The upstream answered but the payload had the wrong shape.
    DataShape,
}

impl OrderLoadError {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> OrderLoadErrorKind {
        match self {
            Self::Request(_) | Self::Status(_) => OrderLoadErrorKind::Fetch,
            Self::InvalidBody(_) | Self::MissingOrderDetails | Self::MissingCustomer => {
                OrderLoadErrorKind::DataShape
            }
        }
    }
}
