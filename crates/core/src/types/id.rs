//! Newtype IDs for type-safe references.
//!
//! Nothing is persisted, so IDs exist only to correlate the log lines and
//! emails produced by a single submission. Use the `define_id!` macro to
//! create wrappers that cannot be mixed up.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `uuid::Uuid` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `generate()`, `from_uuid()`, `as_uuid()`
/// - `Display` as the hyphenated UUID
///
/// # Example
///
/// ```rust
/// # use webify_core::define_id;
/// define_id!(InvoiceId);
/// define_id!(QuoteId);
///
/// let invoice_id = InvoiceId::generate();
/// let quote_id = QuoteId::generate();
///
/// // These are different types, so this won't compile:
/// // let _: InvoiceId = quote_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Generate a new random (v4) ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(id: ::uuid::Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(RequestId);
define_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn test_display_is_hyphenated_uuid() {
        let uuid = uuid::Uuid::nil();
        assert_eq!(
            OrderId::from_uuid(uuid).to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
