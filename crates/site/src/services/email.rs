//! Email service for website request notifications.
//!
//! There is no real delivery. The `Log` transport writes the message to the
//! tracing output and resolves successfully after a simulated delay; the
//! `Disabled` transport refuses every message. Bodies are rendered from
//! Askama plain-text templates.

use std::time::Duration;

use askama::Template;
use thiserror::Error;
use webify_core::{Email, WebsiteRequest};

use crate::config::{EmailConfig, EmailTransportKind};

const NOT_PROVIDED: &str = "Not provided";

/// Plain text body of the operator notification.
#[derive(Template)]
#[template(path = "email/operator_notification.txt")]
struct OperatorNotificationText<'a> {
    full_name: &'a str,
    email: &'a str,
    business_name: &'a str,
    website_type: &'a str,
    pages: &'a str,
    business_description: &'a str,
    color_scheme: &'a str,
    reference_websites: &'a str,
    budget: &'a str,
    timeframe: &'a str,
}

/// Plain text body of the client thank-you email.
#[derive(Template)]
#[template(path = "email/thank_you.txt")]
struct ThankYouText<'a> {
    name: &'a str,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Delivery is switched off by configuration.
    #[error("Email delivery is disabled")]
    Disabled,

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// An outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: Email,
    pub subject: String,
    pub body: String,
}

/// Result of sending both emails for a website request.
///
/// Both sends are always attempted, in order.
#[derive(Debug)]
pub struct RequestEmailOutcome {
    pub operator: Result<(), EmailError>,
    pub client: Result<(), EmailError>,
}

impl RequestEmailOutcome {
    /// Collapse into a single result, reporting the first failure.
    ///
    /// # Errors
    ///
    /// Returns the operator error if that send failed, otherwise the client
    /// error.
    pub fn into_result(self) -> Result<(), EmailError> {
        self.operator.and(self.client)
    }
}

/// Email service for transactional messages.
#[derive(Debug, Clone)]
pub struct EmailService {
    transport: EmailTransportKind,
    delay: Duration,
    operator_address: Email,
}

impl EmailService {
    /// Create a new email service from configuration.
    #[must_use]
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            transport: config.transport,
            delay: config.delay,
            operator_address: config.operator_address.clone(),
        }
    }

    /// Address that receives website request notifications.
    #[must_use]
    pub const fn operator_address(&self) -> &Email {
        &self.operator_address
    }

    /// Send a single message through the configured transport.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Disabled`] when delivery is switched off.
    pub async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        match self.transport {
            EmailTransportKind::Disabled => {
                tracing::warn!(to = %message.to, subject = %message.subject, "Email delivery disabled");
                Err(EmailError::Disabled)
            }
            EmailTransportKind::Log => {
                tracing::info!(to = %message.to, subject = %message.subject, "Sending email");
                tracing::debug!(body = %message.body, "Email body");

                tokio::time::sleep(self.delay).await;

                tracing::info!(to = %message.to, "Email sent successfully");
                Ok(())
            }
        }
    }

    /// Send the operator notification and the client thank-you, in that order.
    ///
    /// The thank-you is sent even if the notification fails.
    pub async fn send_request_emails(&self, request: &WebsiteRequest) -> RequestEmailOutcome {
        let operator = match operator_notification(request, &self.operator_address) {
            Ok(message) => self.send(&message).await,
            Err(e) => Err(e),
        };

        let client = match thank_you(request) {
            Ok(message) => self.send(&message).await,
            Err(e) => Err(e),
        };

        RequestEmailOutcome { operator, client }
    }
}

/// Build the notification sent to the site operator.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn operator_notification(
    request: &WebsiteRequest,
    operator: &Email,
) -> Result<EmailMessage, EmailError> {
    let body = OperatorNotificationText {
        full_name: &request.full_name,
        email: request.email.as_str(),
        business_name: request.business_name.as_deref().unwrap_or(NOT_PROVIDED),
        website_type: request.website_type.label(),
        pages: request.pages.as_deref().unwrap_or(NOT_PROVIDED),
        business_description: &request.business_description,
        color_scheme: request.color_scheme.as_deref().unwrap_or(NOT_PROVIDED),
        reference_websites: request.reference_websites.as_deref().unwrap_or(NOT_PROVIDED),
        budget: request.budget.label(),
        timeframe: request.timeframe.label(),
    }
    .render()?;

    Ok(EmailMessage {
        to: operator.clone(),
        subject: format!(
            "New Website Request: {} from {}",
            request.website_type.label(),
            request.full_name
        ),
        body,
    })
}

/// Build the thank-you email sent to the client.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn thank_you(request: &WebsiteRequest) -> Result<EmailMessage, EmailError> {
    let body = ThankYouText {
        name: &request.full_name,
    }
    .render()?;

    Ok(EmailMessage {
        to: request.email.clone(),
        subject: "Thank You for Your Website Request - Webify".to_string(),
        body,
    })
}
