//! Website request (lead intake) route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;
use webify_core::{
    BudgetRange, LeadForm, SubmissionStatus, Timeframe, ValidationErrors, WebsiteType,
};

use crate::error::{Result, add_breadcrumb};
use crate::middleware::Fragment;
use crate::routes::home::HomeTemplate;
use crate::routes::{Toast, render};
use crate::state::AppState;

const SUBMITTED: Toast = Toast::success(
    "Request Submitted Successfully",
    "We will review your details and get back to you within 24 hours.",
);

const SUBMIT_FAILED: Toast = Toast::error(
    "Error Submitting Request",
    "There was a problem submitting your request. Please try again.",
);

/// Everything the request form section needs to render.
#[derive(Debug, Clone, Default)]
pub struct RequestFormView {
    pub status: SubmissionStatus,
    /// Values shown in the inputs.
    pub values: LeadForm,
    pub errors: ValidationErrors,
    pub toast: Option<Toast>,
}

impl RequestFormView {
    /// Re-render the submitted values with inline errors.
    #[must_use]
    pub fn invalid(values: LeadForm, errors: ValidationErrors) -> Self {
        Self {
            status: SubmissionStatus::Idle,
            values,
            errors,
            toast: None,
        }
    }

    /// Success panel.
    #[must_use]
    pub fn submitted() -> Self {
        Self {
            status: SubmissionStatus::Success,
            toast: Some(SUBMITTED),
            ..Self::default()
        }
    }

    /// Keep the input and show the error toast.
    #[must_use]
    pub fn failed(values: LeadForm) -> Self {
        Self {
            status: SubmissionStatus::Error,
            values,
            errors: ValidationErrors::new(),
            toast: Some(SUBMIT_FAILED),
        }
    }

    #[must_use]
    pub const fn website_types(&self) -> &'static [WebsiteType] {
        WebsiteType::ALL
    }

    #[must_use]
    pub const fn budgets(&self) -> &'static [BudgetRange] {
        BudgetRange::ALL
    }

    #[must_use]
    pub const fn timeframes(&self) -> &'static [Timeframe] {
        Timeframe::ALL
    }
}

/// The request form card on its own (form or success panel, plus toast).
#[derive(Template, WebTemplate)]
#[template(path = "request/card.html")]
pub struct RequestFormFragment {
    pub request_form: RequestFormView,
}

/// Empty form, used by "Submit Another Request".
///
/// Clients without the script are sent back to the form on the landing page.
pub async fn form(Fragment(partial): Fragment) -> Response {
    if partial {
        RequestFormFragment {
            request_form: RequestFormView::default(),
        }
        .into_response()
    } else {
        Redirect::to("/#request-form").into_response()
    }
}

/// Submit a website request.
///
/// POST /request
///
/// Validates the form, then sends the operator notification and the client
/// thank-you. Responds 422 with inline errors when validation fails and 502
/// with the error toast when either email fails.
#[instrument(
    skip(state, form),
    fields(email = %form.email.trim(), website_type = %form.website_type)
)]
pub async fn submit(
    State(state): State<AppState>,
    Fragment(partial): Fragment,
    Form(form): Form<LeadForm>,
) -> Result<Response> {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            tracing::info!(fields = ?errors.fields().collect::<Vec<_>>(), "Website request failed validation");
            return respond(
                &state,
                partial,
                StatusCode::UNPROCESSABLE_ENTITY,
                RequestFormView::invalid(form, errors),
            );
        }
    };

    add_breadcrumb(
        "request",
        "Website request submitted",
        Some(&[("website_type", request.website_type.value())]),
    );

    match state.email().send_request_emails(&request).await.into_result() {
        Ok(()) => {
            tracing::info!(request_id = %request.id, "Website request emails sent");
            respond(&state, partial, StatusCode::OK, RequestFormView::submitted())
        }
        Err(e) => {
            tracing::error!(request_id = %request.id, error = %e, "Failed to send website request emails");
            respond(
                &state,
                partial,
                StatusCode::BAD_GATEWAY,
                RequestFormView::failed(form),
            )
        }
    }
}

fn respond(
    state: &AppState,
    partial: bool,
    status: StatusCode,
    request_form: RequestFormView,
) -> Result<Response> {
    if partial {
        render(status, &RequestFormFragment { request_form })
    } else {
        render(status, &HomeTemplate::new(state, request_form))
    }
}
