//! Demo checkout: package selection and payment method.
//!
//! Card fields are accepted but never required, even when the card method is
//! selected. The checkout is a simulation and its outcome does not depend on
//! them. Card number and CVV are wrapped in [`SecretString`] as soon as they
//! leave the raw form so they cannot end up in logs.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::id::OrderId;
use super::price::{CurrencyCode, Price};
use super::validation::ValidationErrors;
use crate::define_options;

define_options! {
    /// Purchasable service package.
    pub enum WebsitePackage("website package") {
        #[default]
        Basic => ("basic", "Basic Website"),
        Advanced => ("advanced", "Advanced Website"),
        Maintenance => ("maintenance", "Monthly Maintenance"),
    }
}

define_options! {
    /// How the client intends to pay.
    pub enum PaymentMethod("payment method") {
        #[default]
        Card => ("card", "Credit Card"),
        Paypal => ("paypal", "PayPal"),
        Bank => ("bank", "Bank Transfer"),
    }
}

/// Billing cadence of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Billing {
    OneTime,
    Monthly,
}

impl Billing {
    /// Suffix shown after the price.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Monthly => "/month",
        }
    }
}

impl WebsitePackage {
    /// Price of the package.
    #[must_use]
    pub fn price(self) -> Price {
        let euros = match self {
            Self::Basic => 200,
            Self::Advanced => 400,
            Self::Maintenance => 50,
        };
        Price::whole(euros, CurrencyCode::EUR)
    }

    #[must_use]
    pub const fn billing(self) -> Billing {
        match self {
            Self::Basic | Self::Advanced => Billing::OneTime,
            Self::Maintenance => Billing::Monthly,
        }
    }

    /// Label used in the package `<select>`, e.g. "Basic Website - €200".
    #[must_use]
    pub fn option_label(self) -> String {
        format!("{} - {}", self.label(), self.price())
    }
}

/// Raw checkout form submission.
///
/// Implements `Debug` manually to redact card data.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub package: String,
    pub payment_method: String,
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl fmt::Debug for CheckoutForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutForm")
            .field("package", &self.package)
            .field("payment_method", &self.payment_method)
            .field("cardholder_name", &self.cardholder_name)
            .field("card_number", &"[REDACTED]")
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

impl CheckoutForm {
    /// Validate the package and payment method.
    ///
    /// Card details are collected only when the card method is selected and
    /// at least one card field was filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when the package or method is missing or
    /// unknown.
    pub fn validate(&self) -> Result<CheckoutOrder, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let package = self
            .package
            .parse::<WebsitePackage>()
            .inspect_err(|_| errors.add("package", "Please select a website package."))
            .ok();

        let payment_method = self
            .payment_method
            .parse::<PaymentMethod>()
            .inspect_err(|_| errors.add("payment_method", "Please select a payment method."))
            .ok();

        let (Some(package), Some(payment_method)) = (package, payment_method) else {
            return Err(errors);
        };

        let card = (payment_method == PaymentMethod::Card)
            .then(|| CardDetails::from_form(self))
            .flatten();

        Ok(CheckoutOrder {
            id: OrderId::generate(),
            package,
            payment_method,
            card,
        })
    }
}

/// A validated checkout order. Nothing is charged.
#[derive(Debug)]
pub struct CheckoutOrder {
    pub id: OrderId,
    pub package: WebsitePackage,
    pub payment_method: PaymentMethod,
    pub card: Option<CardDetails>,
}

impl CheckoutOrder {
    /// Amount due for the order.
    #[must_use]
    pub fn amount(&self) -> Price {
        self.package.price()
    }
}

/// Card fields as entered. All optional.
///
/// `SecretString`'s `Debug` prints a redaction marker, so the derived
/// `Debug` is safe.
#[derive(Debug)]
pub struct CardDetails {
    pub cardholder_name: Option<String>,
    pub number: Option<SecretString>,
    pub expiry_date: Option<String>,
    pub cvv: Option<SecretString>,
}

impl CardDetails {
    fn from_form(form: &CheckoutForm) -> Option<Self> {
        let details = Self {
            cardholder_name: non_empty(&form.cardholder_name),
            number: non_empty(&form.card_number).map(SecretString::from),
            expiry_date: non_empty(&form.expiry_date),
            cvv: non_empty(&form.cvv).map(SecretString::from),
        };

        let any = details.cardholder_name.is_some()
            || details.number.is_some()
            || details.expiry_date.is_some()
            || details.cvv.is_some();

        any.then_some(details)
    }

    /// Last four digits of the card number, ignoring spaces and dashes.
    #[must_use]
    pub fn last_four(&self) -> Option<String> {
        let number = self.number.as_ref()?;
        let digits: Vec<char> = number
            .expose_secret()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let start = digits.len().checked_sub(4)?;
        digits.get(start..).map(|tail| tail.iter().collect())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
