//! Fragment request detection.
//!
//! The client script posts forms in the background and marks those requests
//! with `X-Fragment: true`. Handlers answer them with just the affected
//! section; everything else gets the full page.

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header set by the client script on background requests.
pub const FRAGMENT_HEADER: &str = "x-fragment";

/// Whether the request asked for a fragment instead of a full page.
///
/// # Example
///
/// ```ignore
/// async fn handler(Fragment(partial): Fragment) -> impl IntoResponse {
///     if partial { /* section only */ } else { /* whole page */ }
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fragment(pub bool);

impl Fragment {
    fn from_parts(parts: &Parts) -> Self {
        Self(
            parts
                .headers
                .get(FRAGMENT_HEADER)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
        )
    }
}

impl<S> FromRequestParts<S> for Fragment
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/checkout/summary");
        if let Some(value) = header {
            builder = builder.header(FRAGMENT_HEADER, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_detects_fragment_header() {
        assert_eq!(Fragment::from_parts(&parts(Some("true"))), Fragment(true));
        assert_eq!(Fragment::from_parts(&parts(Some("TRUE"))), Fragment(true));
    }

    #[test]
    fn test_missing_or_other_value_is_full_page() {
        assert_eq!(Fragment::from_parts(&parts(None)), Fragment(false));
        assert_eq!(Fragment::from_parts(&parts(Some("1"))), Fragment(false));
    }
}
