//! Business logic services for the site.
//!
//! # Services
//!
//! - `email` - Stub email delivery for website request notifications
//! - `payment` - Simulated payment processing for the demo checkout

pub mod email;
pub mod payment;

pub use email::{EmailError, EmailMessage, EmailService, RequestEmailOutcome};
pub use payment::{PaymentReceipt, PaymentSimulator};
