//! Website request form: validation, submission and the fragment protocol.

use std::time::Duration;

use axum::http::StatusCode;
use webify_integration_tests::{TestApp, as_pairs, description_of, valid_lead_fields};
use webify_site::config::EmailTransportKind;

const SUCCESS_TITLE: &str = "Request Submitted Successfully";
const ERROR_TITLE: &str = "Error Submitting Request";

fn with_field(
    mut fields: Vec<(&'static str, String)>,
    name: &str,
    value: &str,
) -> Vec<(&'static str, String)> {
    if let Some(field) = fields.iter_mut().find(|(k, _)| *k == name) {
        field.1 = value.to_string();
    }
    fields
}

#[tokio::test(start_paused = true)]
async fn test_description_of_99_characters_rejected() {
    let fields = valid_lead_fields(&description_of(99));
    let response = TestApp::new()
        .post_form("/request", &as_pairs(&fields), true)
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Description must be at least 100 characters."));
    assert!(!response.body.contains(SUCCESS_TITLE));
}

#[tokio::test(start_paused = true)]
async fn test_description_of_100_characters_accepted() {
    let fields = valid_lead_fields(&description_of(100));
    let response = TestApp::new()
        .post_form("/request", &as_pairs(&fields), true)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Thank You!"));
}

#[tokio::test(start_paused = true)]
async fn test_description_length_counts_trailing_whitespace() {
    let description = format!("{} ", description_of(99));
    let fields = with_field(
        with_field(valid_lead_fields(&description), "full_name", " A"),
        "email",
        "Ana@Bakery.PT",
    );
    let response = TestApp::new()
        .post_form("/request", &as_pairs(&fields), true)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Thank You!"));
}

#[tokio::test(start_paused = true)]
async fn test_description_counts_characters_not_bytes() {
    // 100 two-byte characters
    let description = "é".repeat(100);
    let fields = valid_lead_fields(&description);
    let response = TestApp::new()
        .post_form("/request", &as_pairs(&fields), true)
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn test_malformed_emails_rejected() {
    let app = TestApp::new();

    for email in ["", "ana", "ana@", "@bakery.pt", "ana@@bakery.pt", "ana@bakery", "ana lopes@bakery.pt", "ana!@bakery.pt"] {
        let fields = with_field(valid_lead_fields(&description_of(120)), "email", email);
        let response = app.post_form("/request", &as_pairs(&fields), true).await;

        assert_eq!(
            response.status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "accepted {email:?}"
        );
        assert!(response.body.contains("Please enter a valid email address."));
    }
}

#[tokio::test(start_paused = true)]
async fn test_all_errors_reported_together() {
    let response = TestApp::new()
        .post_form(
            "/request",
            &[
                ("full_name", "A"),
                ("email", "not-an-email"),
                ("website_type", "landing"),
                ("business_description", "Too short."),
                ("budget", "free"),
                ("timeframe", "yesterday"),
            ],
            true,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    for message in [
        "Full name must be at least 2 characters.",
        "Please enter a valid email address.",
        "Please select a website type.",
        "Description must be at least 100 characters.",
        "Please select a budget range.",
        "Please select a timeframe.",
    ] {
        assert!(response.body.contains(message), "missing {message:?}");
    }

    // Input is kept for correction
    assert!(response.body.contains(r#"value="not-an-email""#));
}

#[tokio::test(start_paused = true)]
async fn test_valid_submission_sends_both_emails_then_succeeds() {
    let fields = valid_lead_fields(&description_of(150));
    let start = tokio::time::Instant::now();

    let response = TestApp::new()
        .post_form("/request", &as_pairs(&fields), true)
        .await;

    // Two sequential sends of one second each
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Thank You!"));
    assert!(response.body.contains(SUCCESS_TITLE));
    assert!(
        response
            .body
            .contains("We will review your details and get back to you within 24 hours.")
    );
    assert!(response.body.contains("Submit Another Request"));
    assert!(!response.body.contains("<form"));
}

#[tokio::test(start_paused = true)]
async fn test_fragment_response_is_partial() {
    let fields = valid_lead_fields(&description_of(150));
    let app = TestApp::new();

    let fragment = app.post_form("/request", &as_pairs(&fields), true).await;
    assert!(!fragment.body.contains("<html"));

    let page = app.post_form("/request", &as_pairs(&fields), false).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.starts_with("<!DOCTYPE html>"));
    assert!(page.body.contains("Thank You!"));
    assert!(page.body.contains(r#"id="services""#));
}

#[tokio::test(start_paused = true)]
async fn test_email_failure_shows_error_and_keeps_input() {
    let fields = with_field(
        valid_lead_fields(&description_of(150)),
        "business_name",
        "Padaria Lopes",
    );
    let response = TestApp::with_transport(EmailTransportKind::Disabled)
        .post_form("/request", &as_pairs(&fields), true)
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert!(response.body.contains(ERROR_TITLE));
    assert!(
        response
            .body
            .contains("There was a problem submitting your request. Please try again.")
    );
    assert!(response.body.contains(r#"value="Ana Lopes""#));
    assert!(response.body.contains(r#"value="Padaria Lopes""#));
    assert!(response.body.contains("<form"));
}

#[tokio::test]
async fn test_reset_returns_empty_form() {
    let app = TestApp::new();

    let fragment = app.get_fragment("/request/form").await;
    assert_eq!(fragment.status, StatusCode::OK);
    assert!(fragment.body.contains(r#"name="full_name""#));
    assert!(fragment.body.contains(r#"value="""#));
    assert!(!fragment.body.contains("<html"));

    let page = app.get("/request/form").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.header("location"), Some("/#request-form"));
}

#[tokio::test(start_paused = true)]
async fn test_submissions_are_rate_limited() {
    let app = TestApp::new();
    let fields = [("full_name", "A")];

    let mut statuses = Vec::new();
    for _ in 0..11 {
        statuses.push(app.post_form("/request", &fields, true).await.status);
    }

    assert!(
        statuses[..10]
            .iter()
            .all(|status| *status == StatusCode::UNPROCESSABLE_ENTITY)
    );
    assert_eq!(statuses[10], StatusCode::TOO_MANY_REQUESTS);
}
