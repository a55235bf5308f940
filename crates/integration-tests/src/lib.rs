//! Integration tests for the Webify site.
//!
//! The router is driven in process with `tower::ServiceExt::oneshot`; no
//! listener, no network. Simulated delays use the real defaults, so tests
//! that submit forms run with `#[tokio::test(start_paused = true)]`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p webify-integration-tests
//! ```

use std::path::PathBuf;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header::CONTENT_TYPE},
};
use tower::ServiceExt;
use url::Url;
use webify_core::Email;
use webify_site::config::{EmailConfig, EmailTransportKind, SentryConfig, SiteConfig};
use webify_site::state::AppState;

/// Address the test client pretends to come from.
pub const CLIENT_IP: &str = "203.0.113.10";

/// Operator address used by every test app.
pub const OPERATOR_EMAIL: &str = "hello@webify.example";

/// Largest body any page produces, with room to spare.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Site configuration with production delays and no Sentry.
///
/// # Panics
///
/// Panics if the hard-coded URL or email fail to parse.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn test_config(transport: EmailTransportKind) -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: Url::parse("http://localhost:3000").unwrap(),
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../site/static")),
        email: EmailConfig {
            operator_address: Email::parse(OPERATOR_EMAIL).unwrap(),
            transport,
            delay: Duration::from_secs(1),
        },
        payment_delay: Duration::from_secs(2),
        sentry: SentryConfig::default(),
    }
}

/// A fully assembled application router.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
}

/// Status, headers and body of a response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of a response header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// App with the logging email transport.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(EmailTransportKind::Log)
    }

    /// App with a specific email transport.
    #[must_use]
    pub fn with_transport(transport: EmailTransportKind) -> Self {
        Self {
            router: webify_site::app(AppState::new(test_config(transport))),
        }
    }

    /// Full-page GET.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri), Body::empty()).await
    }

    /// GET carrying `X-Fragment: true`.
    pub async fn get_fragment(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).header("x-fragment", "true"), Body::empty())
            .await
    }

    /// Form-encoded POST, as a fragment request or a plain form post.
    pub async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        fragment: bool,
    ) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        let mut builder = Request::post(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("x-forwarded-for", CLIENT_IP);
        if fragment {
            builder = builder.header("x-fragment", "true");
        }

        self.send(builder, Body::from(body)).await
    }

    #[allow(clippy::unwrap_used)]
    async fn send(&self, builder: axum::http::request::Builder, body: Body) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), MAX_BODY_BYTES).await.unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// A business description of exactly `chars` characters.
#[must_use]
pub fn description_of(chars: usize) -> String {
    "We run a family bakery in Porto and want customers to find our hours. "
        .chars()
        .cycle()
        .take(chars)
        .collect()
}

/// Lead form fields that pass validation.
#[must_use]
pub fn valid_lead_fields(description: &str) -> Vec<(&'static str, String)> {
    vec![
        ("full_name", "Ana Lopes".to_string()),
        ("email", "ana@bakery.pt".to_string()),
        ("business_name", String::new()),
        ("website_type", "basic".to_string()),
        ("pages", "3".to_string()),
        ("business_description", description.to_string()),
        ("color_scheme", String::new()),
        ("reference_websites", String::new()),
        ("budget", "200-400".to_string()),
        ("timeframe", "48-hours".to_string()),
    ]
}

/// Borrow owned form fields for [`TestApp::post_form`].
#[must_use]
pub fn as_pairs<'a>(fields: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
}
