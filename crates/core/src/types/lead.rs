//! Lead intake: the "request your website" form.
//!
//! [`LeadForm`] is the raw record exactly as the browser submits it.
//! [`LeadForm::validate`] turns it into a [`WebsiteRequest`] or reports every
//! failing field at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::RequestId;
use super::validation::ValidationErrors;
use crate::define_options;

/// Minimum number of characters in the full name.
pub const MIN_FULL_NAME_CHARS: usize = 2;

/// Minimum number of characters in the business description.
pub const MIN_DESCRIPTION_CHARS: usize = 100;

define_options! {
    /// Kind of website the client is asking for.
    pub enum WebsiteType("website type") {
        #[default]
        Basic => ("basic", "Basic Website"),
        Advanced => ("advanced", "Advanced Website"),
        Custom => ("custom", "Custom Request"),
    }
}

define_options! {
    /// Budget bracket.
    pub enum BudgetRange("budget") {
        UnderTwoHundred => ("under-200", "Less than €200"),
        #[default]
        TwoToFourHundred => ("200-400", "€200-400"),
        FourToSixHundred => ("400-600", "€400-600"),
        OverSixHundred => ("over-600", "More than €600"),
    }
}

define_options! {
    /// Requested delivery timeframe.
    pub enum Timeframe("timeframe") {
        #[default]
        WithinFortyEightHours => ("48-hours", "Within 48 hours"),
        ThreeToFiveDays => ("3-5-days", "3-5 days"),
        Flexible => ("flexible", "Flexible"),
    }
}

/// Raw lead form submission.
///
/// Every field is a string so a malformed submission still deserializes and
/// can be re-rendered with inline errors. Missing fields default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
    pub business_name: String,
    pub website_type: String,
    pub pages: String,
    pub business_description: String,
    pub color_scheme: String,
    pub reference_websites: String,
    pub budget: String,
    pub timeframe: String,
}

impl Default for LeadForm {
    /// An empty form with the enum fields preselected.
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            business_name: String::new(),
            website_type: WebsiteType::default().value().to_owned(),
            pages: String::new(),
            business_description: String::new(),
            color_scheme: String::new(),
            reference_websites: String::new(),
            budget: BudgetRange::default().value().to_owned(),
            timeframe: Timeframe::default().value().to_owned(),
        }
    }
}

impl LeadForm {
    /// Validate the submission.
    ///
    /// Lengths count characters, not bytes, of the text as submitted.
    /// Accepted text is stored trimmed; empty optional fields become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] keyed by field name when any rule fails.
    pub fn validate(&self) -> Result<WebsiteRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.full_name.chars().count() < MIN_FULL_NAME_CHARS {
            errors.add(
                "full_name",
                "Full name must be at least 2 characters.",
            );
        }

        let email = Email::parse(self.email.trim())
            .inspect_err(|_| errors.add("email", "Please enter a valid email address."))
            .ok();

        let website_type = self
            .website_type
            .parse::<WebsiteType>()
            .inspect_err(|_| errors.add("website_type", "Please select a website type."))
            .ok();

        if self.business_description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.add(
                "business_description",
                "Description must be at least 100 characters.",
            );
        }

        let budget = self
            .budget
            .parse::<BudgetRange>()
            .inspect_err(|_| errors.add("budget", "Please select a budget range."))
            .ok();

        let timeframe = self
            .timeframe
            .parse::<Timeframe>()
            .inspect_err(|_| errors.add("timeframe", "Please select a timeframe."))
            .ok();

        match (email, website_type, budget, timeframe) {
            (Some(email), Some(website_type), Some(budget), Some(timeframe))
                if errors.is_empty() =>
            {
                Ok(WebsiteRequest {
                    id: RequestId::generate(),
                    full_name: self.full_name.trim().to_owned(),
                    email,
                    business_name: optional(&self.business_name),
                    website_type,
                    pages: optional(&self.pages),
                    business_description: self.business_description.trim().to_owned(),
                    color_scheme: optional(&self.color_scheme),
                    reference_websites: optional(&self.reference_websites),
                    budget,
                    timeframe,
                    submitted_at: Utc::now(),
                })
            }
            _ => Err(errors),
        }
    }
}

/// A validated website request.
///
/// Lives only for the duration of the submit call; nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebsiteRequest {
    pub id: RequestId,
    pub full_name: String,
    pub email: Email,
    pub business_name: Option<String>,
    pub website_type: WebsiteType,
    pub pages: Option<String>,
    pub business_description: String,
    pub color_scheme: Option<String>,
    pub reference_websites: Option<String>,
    pub budget: BudgetRange,
    pub timeframe: Timeframe,
    pub submitted_at: DateTime<Utc>,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
