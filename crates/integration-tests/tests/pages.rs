//! Landing page, static assets and cross-cutting middleware.

use axum::http::StatusCode;
use webify_integration_tests::{OPERATOR_EMAIL, TestApp};

#[tokio::test]
async fn test_health() {
    let response = TestApp::new().get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_landing_page_sections() {
    let response = TestApp::new().get("/").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = &response.body;
    assert!(body.starts_with("<!DOCTYPE html>"));
    for anchor in [r#"id="services""#, r#"id="testimonials""#, r#"id="request-form""#] {
        assert!(body.contains(anchor), "missing {anchor}");
    }
    for link in ["/#services", "/#testimonials", "/#request-form", "/checkout"] {
        assert!(body.contains(&format!(r#"href="{link}""#)), "missing nav link {link}");
    }

    assert!(body.contains("Websites and Apps for"));
    assert!(body.contains("Clear Pricing, Exceptional Value"));
    assert!(body.contains("Benefits That Make Us Stand Out"));
    assert!(body.contains("What Our Clients Say"));
    assert!(body.contains("Tell Us About Your Project"));
    assert!(body.contains("All rights reserved."));
    assert!(body.contains(&format!("mailto:{OPERATOR_EMAIL}")));
}

#[tokio::test]
async fn test_pricing_cards() {
    let body = TestApp::new().get("/").await.body;

    assert!(body.contains("Basic Website"));
    assert!(body.contains("Advanced Website"));
    assert!(body.contains("Monthly Maintenance"));
    assert!(body.contains("€200"));
    assert!(body.contains("€400"));
    assert!(body.contains("€50"));
    assert!(body.contains("/month"));
    assert_eq!(body.matches("Most Popular").count(), 1);
    assert!(body.contains(r#"href="/checkout?package=maintenance""#));
}

#[tokio::test]
async fn test_request_form_defaults() {
    let body = TestApp::new().get("/").await.body;

    assert!(body.contains(r#"<option value="basic" selected>"#));
    assert!(body.contains(r#"<option value="200-400" selected>"#));
    assert!(body.contains(r#"<option value="48-hours" selected>"#));
    assert!(body.contains("Submit Your Request"));
}

#[tokio::test]
async fn test_security_headers_and_request_id() {
    let response = TestApp::new().get("/").await;

    assert_eq!(response.header("x-frame-options"), Some("DENY"));
    assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
    assert!(
        response
            .header("content-security-policy")
            .is_some_and(|csp| csp.contains("script-src 'self'"))
    );
    assert!(response.header("x-request-id").is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = TestApp::new().get("/pricing").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Not found: /pricing");
}

#[tokio::test]
async fn test_static_assets_served() {
    let app = TestApp::new();

    let css = app.get("/static/css/main.css").await;
    assert_eq!(css.status, StatusCode::OK);
    assert_eq!(css.header("cache-control"), Some("public, max-age=3600"));

    let js = app.get("/static/js/site.js").await;
    assert_eq!(js.status, StatusCode::OK);
    assert!(js.body.contains("X-Fragment"));

    let logo = app.get("/static/webify-logo.svg").await;
    assert_eq!(logo.status, StatusCode::OK);
}
