//! Submission status for the site's forms.

use serde::{Deserialize, Serialize};

/// Where a form submission ended up after the server handled it.
///
/// The "submitting" state lives only in the browser (disabled button while
/// the request is in flight), so the server only ever renders these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Fresh form, or form re-rendered with field errors.
    #[default]
    Idle,
    /// Submission accepted; the form is replaced by a success panel.
    Success,
    /// Submission failed after validation; the form keeps its input.
    Error,
}

impl SubmissionStatus {
    /// Whether the form itself should be rendered.
    #[must_use]
    pub const fn shows_form(self) -> bool {
        !matches!(self, Self::Success)
    }
}
