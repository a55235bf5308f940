//! Core types for Webify.
//!
//! This module provides type-safe wrappers for common domain concepts and the
//! two form records the site accepts.

pub mod checkout;
pub mod email;
pub mod id;
pub mod lead;
pub mod options;
pub mod price;
pub mod status;
pub mod validation;

pub use checkout::{Billing, CardDetails, CheckoutForm, CheckoutOrder, PaymentMethod, WebsitePackage};
pub use email::{Email, EmailError};
pub use id::*;
pub use lead::{BudgetRange, LeadForm, Timeframe, WebsiteRequest, WebsiteType};
pub use options::UnknownOption;
pub use price::{CurrencyCode, Price};
pub use status::SubmissionStatus;
pub use validation::ValidationErrors;
