//! Demo checkout route handlers.
//!
//! No money moves. A valid submission waits for the simulated processing
//! delay and always ends on the success panel.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use tracing::instrument;
use webify_core::{CheckoutForm, PaymentMethod, SubmissionStatus, ValidationErrors, WebsitePackage};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Fragment;
use crate::routes::{Toast, render};
use crate::services::PaymentReceipt;
use crate::state::AppState;

const PAID: Toast = Toast::success(
    "Payment Successful",
    "Thank you for your purchase! Our team will start working on your website.",
);

/// Bank transfer details shown for the `bank` method.
#[derive(Debug, Clone, Copy)]
pub struct BankDetails {
    pub bank: &'static str,
    pub account_name: &'static str,
    pub iban: &'static str,
    pub bic: &'static str,
}

pub const BANK_DETAILS: BankDetails = BankDetails {
    bank: "Example Bank",
    account_name: "Webify Ltd",
    iban: "DE89 3704 0044 0532 0130 00",
    bic: "EXAMPLEXXX",
};

/// Query string selecting a package and payment method.
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutQuery {
    pub package: Option<String>,
    pub method: Option<String>,
}

impl CheckoutQuery {
    /// Parsed package, default when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] for an unknown package.
    pub fn package(&self) -> Result<WebsitePackage> {
        parse_or_default(self.package.as_deref())
    }

    /// Parsed payment method, default when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] for an unknown method.
    pub fn method(&self) -> Result<PaymentMethod> {
        parse_or_default(self.method.as_deref())
    }
}

fn parse_or_default<T>(raw: Option<&str>) -> Result<T>
where
    T: std::str::FromStr<Err = webify_core::UnknownOption> + Default,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(T::default()),
        Some(value) => value
            .parse()
            .map_err(|e: webify_core::UnknownOption| AppError::BadRequest(e.to_string())),
    }
}

/// Everything the checkout card needs to render.
///
/// Card number and CVV are never echoed back into the page.
#[derive(Debug, Clone, Default)]
pub struct CheckoutView {
    pub status: SubmissionStatus,
    pub package: WebsitePackage,
    pub method: PaymentMethod,
    /// Values shown in the inputs, secrets cleared.
    pub values: CheckoutForm,
    pub errors: ValidationErrors,
    pub receipt: Option<PaymentReceipt>,
    pub toast: Option<Toast>,
}

impl CheckoutView {
    /// Fresh form with the given selections.
    #[must_use]
    pub fn new(package: WebsitePackage, method: PaymentMethod) -> Self {
        Self {
            package,
            method,
            ..Self::default()
        }
    }

    /// Re-render a rejected submission.
    #[must_use]
    pub fn invalid(form: CheckoutForm, errors: ValidationErrors) -> Self {
        Self {
            status: SubmissionStatus::Idle,
            package: form.package.parse().unwrap_or_default(),
            method: form.payment_method.parse().unwrap_or_default(),
            values: CheckoutForm {
                card_number: String::new(),
                cvv: String::new(),
                ..form
            },
            errors,
            receipt: None,
            toast: None,
        }
    }

    /// Success panel for a processed payment.
    #[must_use]
    pub fn paid(receipt: PaymentReceipt) -> Self {
        Self {
            status: SubmissionStatus::Success,
            package: receipt.package,
            method: receipt.method,
            receipt: Some(receipt),
            toast: Some(PAID),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn packages(&self) -> &'static [WebsitePackage] {
        WebsitePackage::ALL
    }

    #[must_use]
    pub const fn methods(&self) -> &'static [PaymentMethod] {
        PaymentMethod::ALL
    }

    #[must_use]
    pub const fn bank(&self) -> BankDetails {
        BANK_DETAILS
    }
}

/// Full checkout page.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub checkout: CheckoutView,
    pub contact_email: String,
}

impl CheckoutTemplate {
    fn new(state: &AppState, checkout: CheckoutView) -> Self {
        Self {
            checkout,
            contact_email: state.email().operator_address().to_string(),
        }
    }
}

/// Checkout card alone (form or success panel, plus toast).
#[derive(Template, WebTemplate)]
#[template(path = "checkout/card.html")]
pub struct CheckoutCardFragment {
    pub checkout: CheckoutView,
}

/// Method-specific payment fields.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/payment_fields.html")]
pub struct PaymentFieldsFragment {
    pub checkout: CheckoutView,
}

/// Order summary card.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/summary.html")]
pub struct SummaryFragment {
    pub checkout: CheckoutView,
}

/// Display the checkout page.
///
/// GET /checkout?package=basic&method=card
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<CheckoutQuery>,
) -> Result<CheckoutTemplate> {
    let view = CheckoutView::new(query.package()?, query.method()?);
    Ok(CheckoutTemplate::new(&state, view))
}

/// Payment fields for the selected method.
///
/// GET /checkout/payment-fields?method=paypal
#[instrument]
pub async fn payment_fields(Query(query): Query<CheckoutQuery>) -> Result<PaymentFieldsFragment> {
    Ok(PaymentFieldsFragment {
        checkout: CheckoutView::new(query.package()?, query.method()?),
    })
}

/// Order summary for the selected package.
///
/// GET /checkout/summary?package=advanced
#[instrument]
pub async fn summary(Query(query): Query<CheckoutQuery>) -> Result<SummaryFragment> {
    Ok(SummaryFragment {
        checkout: CheckoutView::new(query.package()?, query.method()?),
    })
}

/// Submit the simulated payment.
///
/// POST /checkout
///
/// Responds 422 with inline errors for a missing or unknown package or
/// method. Otherwise waits for the simulated processing delay and returns
/// the success panel, whatever the card fields contain.
#[instrument(
    skip(state, form),
    fields(package = %form.package, method = %form.payment_method)
)]
pub async fn submit(
    State(state): State<AppState>,
    Fragment(partial): Fragment,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let order = match form.validate() {
        Ok(order) => order,
        Err(errors) => {
            tracing::info!(fields = ?errors.fields().collect::<Vec<_>>(), "Checkout failed validation");
            return respond(
                &state,
                partial,
                StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutView::invalid(form, errors),
            );
        }
    };

    add_breadcrumb(
        "checkout",
        "Payment submitted",
        Some(&[
            ("package", order.package.value()),
            ("method", order.payment_method.value()),
        ]),
    );

    let receipt = state.payments().process(&order).await;
    respond(&state, partial, StatusCode::OK, CheckoutView::paid(receipt))
}

fn respond(
    state: &AppState,
    partial: bool,
    status: StatusCode,
    checkout: CheckoutView,
) -> Result<Response> {
    if partial {
        render(status, &CheckoutCardFragment { checkout })
    } else {
        render(status, &CheckoutTemplate::new(state, checkout))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = CheckoutQuery::default();
        assert_eq!(query.package().unwrap(), WebsitePackage::Basic);
        assert_eq!(query.method().unwrap(), PaymentMethod::Card);
    }

    #[test]
    fn test_query_blank_is_default() {
        let query = CheckoutQuery {
            package: Some(String::new()),
            method: Some("  ".to_string()),
        };
        assert_eq!(query.package().unwrap(), WebsitePackage::Basic);
        assert_eq!(query.method().unwrap(), PaymentMethod::Card);
    }

    #[test]
    fn test_query_unknown_is_bad_request() {
        let query = CheckoutQuery {
            package: Some("platinum".to_string()),
            method: Some("bank".to_string()),
        };
        assert!(matches!(query.package(), Err(AppError::BadRequest(_))));
        assert_eq!(query.method().unwrap(), PaymentMethod::Bank);
    }

    #[test]
    fn test_invalid_view_drops_secrets() {
        let form = CheckoutForm {
            package: String::new(),
            payment_method: "card".to_string(),
            cardholder_name: "Ana Lopes".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/29".to_string(),
            cvv: "123".to_string(),
        };
        let errors = form.validate().unwrap_err();
        let view = CheckoutView::invalid(form, errors);

        assert_eq!(view.values.cardholder_name, "Ana Lopes");
        assert_eq!(view.values.expiry_date, "12/29");
        assert!(view.values.card_number.is_empty());
        assert!(view.values.cvv.is_empty());
        assert!(view.errors.has("package"));
    }
}
