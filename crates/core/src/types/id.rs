//! Newtype IDs for type-safe entity references.
//!
//! Identifiers in this system are opaque strings issued by external systems
//! (document ids from the admin API, Stripe shipping rates, identity provider
//! user ids). Use the `define_id!` macro to create wrappers that prevent
//! accidentally mixing IDs from different sources.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `Display`, `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use tienda_core::define_id;
/// define_id!(InvoiceId);
/// define_id!(RefundId);
///
/// let invoice_id = InvoiceId::new("in_123");
/// let refund_id = RefundId::new("re_123");
///
/// // These are different types, so this won't compile:
/// // let _: InvoiceId = refund_id;
/// assert_eq!(invoice_id.as_str(), "in_123");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Admin API document ids
define_id!(OrderId);
define_id!(ProductId);

// Stripe shipping rate ids (shr_...)
define_id!(ShippingRateId);

// External identity provider user id (the storefront's `clerkId`)
define_id!(ClerkUserId);
