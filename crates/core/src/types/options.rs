//! Closed sets of choices offered by `<select>` and radio inputs.
//!
//! Each option has a stable form value (what the browser submits) and a
//! human label (what the page and the emails show).

/// An option value that does not belong to the expected set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownOption {
    /// Name of the option set, e.g. "website type".
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Macro to define a form option enum.
///
/// Generates:
/// - the enum with `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
///   `Default` (mark one variant `#[default]`)
/// - `Serialize`/`Deserialize` using the form value
/// - `ALL`, `value()`, `label()`, `is()` helpers
/// - `Display` (label) and `FromStr` (form value, [`UnknownOption`] on miss)
///
/// # Example
///
/// ```rust
/// # use webify_core::define_options;
/// define_options! {
///     /// Preferred contact channel.
///     pub enum Channel("contact channel") {
///         #[default]
///         Phone => ("phone", "Phone call"),
///         Email => ("email", "Email"),
///     }
/// }
///
/// assert_eq!("email".parse::<Channel>().unwrap(), Channel::Email);
/// assert_eq!(Channel::default().label(), "Phone call");
/// ```
#[macro_export]
macro_rules! define_options {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($value:literal, $label:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Value submitted by the form control.
            #[must_use]
            pub const fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Human-readable label.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Whether this option has the given form value.
            ///
            /// Templates use this to mark the selected `<option>`.
            #[must_use]
            pub fn is(self, value: &str) -> bool {
                self.value() == value
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::options::UnknownOption;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.value() == s)
                    .ok_or_else(|| $crate::types::options::UnknownOption {
                        kind: $kind,
                        value: s.to_owned(),
                    })
            }
        }
    };
}
