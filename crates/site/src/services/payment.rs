//! Simulated payment processing.
//!
//! No gateway is called. Processing waits a fixed delay and always succeeds.

use std::time::Duration;

use chrono::{DateTime, Utc};
use webify_core::{CheckoutOrder, OrderId, PaymentMethod, Price, WebsitePackage};

/// Confirmation of a simulated payment.
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub order_id: OrderId,
    pub package: WebsitePackage,
    pub amount: Price,
    pub method: PaymentMethod,
    pub card_last_four: Option<String>,
    pub processed_at: DateTime<Utc>,
}

/// Payment "processor" for the demo checkout.
#[derive(Debug, Clone)]
pub struct PaymentSimulator {
    delay: Duration,
}

impl PaymentSimulator {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Process an order.
    ///
    /// Waits the configured delay, then reports success regardless of the
    /// order's contents.
    pub async fn process(&self, order: &CheckoutOrder) -> PaymentReceipt {
        let card_last_four = order.card.as_ref().and_then(|card| card.last_four());

        tracing::info!(
            order_id = %order.id,
            package = %order.package.value(),
            method = %order.payment_method.value(),
            amount = %order.amount(),
            card_last_four = card_last_four.as_deref().unwrap_or("-"),
            "Processing simulated payment"
        );

        tokio::time::sleep(self.delay).await;

        let receipt = PaymentReceipt {
            order_id: order.id,
            package: order.package,
            amount: order.amount(),
            method: order.payment_method,
            card_last_four,
            processed_at: Utc::now(),
        };

        tracing::info!(order_id = %receipt.order_id, "Simulated payment succeeded");
        receipt
    }
}
