//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Landing page
//! GET  /health                    - Health check
//!
//! # Lead intake
//! GET  /request/form              - Empty request form (fragment)
//! POST /request                   - Submit website request
//!
//! # Demo checkout
//! GET  /checkout                  - Checkout page (?package=&method=)
//! GET  /checkout/payment-fields   - Method-specific fields (fragment)
//! GET  /checkout/summary          - Order summary (fragment)
//! POST /checkout                  - Submit simulated payment
//! ```
//!
//! Requests with `X-Fragment: true` receive only the affected section. The
//! same URLs serve full pages to clients without the script.

pub mod checkout;
pub mod home;
pub mod request;

use askama::Template;
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};

use crate::error::Result;
use crate::middleware::form_rate_limiter;
use crate::state::AppState;

/// Notification rendered in the corner of the page after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
    /// Error styling.
    pub destructive: bool,
}

impl Toast {
    #[must_use]
    pub const fn success(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            destructive: false,
        }
    }

    #[must_use]
    pub const fn error(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            destructive: true,
        }
    }
}

/// Create the lead intake routes router.
pub fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(request::submit).route_layer(form_rate_limiter()))
        .route("/form", get(request::form))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(checkout::submit)
                .route_layer(form_rate_limiter())
                .get(checkout::show),
        )
        .route("/payment-fields", get(checkout::payment_fields))
        .route("/summary", get(checkout::summary))
}

/// Create all page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::show))
        .nest("/request", request_routes())
        .nest("/checkout", checkout_routes())
}

/// Render a template with an explicit status code.
///
/// Form handlers answer validation and delivery failures with 422 and 502
/// while still returning HTML.
pub(crate) fn render(status: StatusCode, template: &impl Template) -> Result<Response> {
    Ok((status, Html(template.render()?)).into_response())
}
