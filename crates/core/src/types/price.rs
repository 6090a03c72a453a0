//! Type-safe price representation using decimal arithmetic.
//!
//! Prices arrive from the storefront and the admin API as JSON numbers in the
//! currency's standard unit (dollars, not cents). Payment providers want
//! integer minor units, so [`Price::to_minor_units`] is the single place where
//! that conversion happens.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors converting a price to minor units.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// The amount does not fit in an `i64` once expressed in minor units.
    #[error("price out of range: {0}")]
    OutOfRange(Decimal),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Convert to integer minor units (cents for USD).
    ///
    /// Fractions of a minor unit are rounded to the nearest unit (halves away
    /// from zero), so `19.999` becomes `2000`.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` for amounts below zero and
    /// `PriceError::OutOfRange` if the result does not fit in an `i64`.
    pub fn to_minor_units(&self) -> Result<i64, PriceError> {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(PriceError::Negative(self.amount));
        }

        self.amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_i64())
            .ok_or(PriceError::OutOfRange(self.amount))
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Parse an ISO 4217 code, ignoring case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Self::USD),
            "CAD" => Some(Self::CAD),
            "EUR" => Some(Self::EUR),
            "GBP" => Some(Self::GBP),
            _ => None,
        }
    }

    /// Lowercase code as expected by Stripe (`usd`, `cad`, ...).
    #[must_use]
    pub const fn as_stripe_str(self) -> &'static str {
        match self {
            Self::USD => "usd",
            Self::CAD => "cad",
            Self::EUR => "eur",
            Self::GBP => "gbp",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn usd(amount: &str) -> Price {
        Price::new(
            Decimal::from_str(amount).unwrap_or_default(),
            CurrencyCode::USD,
        )
    }

    #[test]
    fn test_whole_dollars_to_cents() {
        assert_eq!(usd("20").to_minor_units(), Ok(2000));
        assert_eq!(usd("0").to_minor_units(), Ok(0));
    }

    #[test]
    fn test_fractional_dollars_to_cents() {
        assert_eq!(usd("19.99").to_minor_units(), Ok(1999));
        assert_eq!(usd("0.1").to_minor_units(), Ok(10));
        assert_eq!(usd("19.999").to_minor_units(), Ok(2000));
        assert_eq!(usd("0.125").to_minor_units(), Ok(13));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(matches!(
            usd("-1.50").to_minor_units(),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let price = Price::new(Decimal::MAX, CurrencyCode::USD);
        assert!(matches!(
            price.to_minor_units(),
            Err(PriceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(usd("40").display(), "$40.00");
        assert_eq!(usd("12.5").display(), "$12.50");
        assert_eq!(
            Price::new(Decimal::new(995, 2), CurrencyCode::GBP).display(),
            "£9.95"
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(CurrencyCode::from_code("usd"), Some(CurrencyCode::USD));
        assert_eq!(CurrencyCode::from_code("GBP"), Some(CurrencyCode::GBP));
        assert_eq!(CurrencyCode::from_code("JPY"), None);
    }

    #[test]
    fn test_stripe_currency_codes() {
        assert_eq!(CurrencyCode::USD.as_stripe_str(), "usd");
        assert_eq!(CurrencyCode::default(), CurrencyCode::USD);
    }
}
