//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (add unique ID to each request, recorded in the span)
//! 4. Security headers (CSP, frame and isolation policies)
//! 5. Rate limiting (governor, form submissions only)

pub mod fragment;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use fragment::Fragment;
pub use rate_limit::form_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
