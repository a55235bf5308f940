//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;
use webify_core::WebsitePackage;

use crate::filters;
use crate::routes::request::RequestFormView;
use crate::state::AppState;

// =============================================================================
// Static Content
// =============================================================================

/// A pricing card in the services section.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCard {
    pub package: WebsitePackage,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Highlighted with a "Most Popular" badge.
    pub popular: bool,
}

impl ServiceCard {
    /// Checkout URL with this package preselected.
    #[must_use]
    pub fn checkout_url(&self) -> String {
        format!("/checkout?package={}", self.package.value())
    }
}

/// A "why choose us" card.
#[derive(Debug, Clone, Copy)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A client quote.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

impl Testimonial {
    /// Avatar letter.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        package: WebsitePackage::Basic,
        description: "Perfect for small businesses looking to establish an online presence quickly.",
        features: &[
            "1-3 pages custom design",
            "Mobile responsive layout",
            "Contact form integration",
            "Delivered within 24 hours",
            "Basic SEO optimization",
        ],
        popular: false,
    },
    ServiceCard {
        package: WebsitePackage::Advanced,
        description: "Comprehensive solution for businesses requiring more features and pages.",
        features: &[
            "Up to 5 pages custom design",
            "Mobile responsive layout",
            "Contact form integration",
            "Delivered within 48 hours",
            "Advanced SEO optimization",
            "Social media integration",
            "Basic animations and effects",
        ],
        popular: true,
    },
    ServiceCard {
        package: WebsitePackage::Maintenance,
        description: "Keep your website updated and running smoothly with our maintenance service.",
        features: &[
            "Regular content updates",
            "Technical support",
            "Security monitoring",
            "Performance optimization",
            "Monthly analytics report",
        ],
        popular: false,
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "zap",
        title: "Rapid Delivery",
        description: "Get your website up and running in as little as 48 hours, without sacrificing quality or attention to detail.",
    },
    Benefit {
        icon: "code",
        title: "Professional Design",
        description: "Custom-tailored websites that look great on all devices and truly represent your brand and business values.",
    },
    Benefit {
        icon: "check",
        title: "Competitive Pricing",
        description: "Transparent pricing with no hidden fees, making professional web design accessible for small businesses.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Webify delivered my business website in just 48 hours, and the quality exceeded my expectations. The process was straightforward and hassle-free.",
        name: "Sarah Johnson",
        role: "Boutique Owner",
    },
    Testimonial {
        quote: "As a small business owner with limited tech knowledge, I was nervous about getting a website. Webify made it incredibly simple and the result is professional and effective.",
        name: "Michael Torres",
        role: "Restaurant Manager",
    },
    Testimonial {
        quote: "The value for money is exceptional. I received a beautiful, functional website that perfectly represents my brand at a fraction of what other agencies quoted.",
        name: "Emma Phillips",
        role: "Fitness Instructor",
    },
];

// =============================================================================
// Template
// =============================================================================

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub services: &'static [ServiceCard],
    pub benefits: &'static [Benefit],
    pub testimonials: &'static [Testimonial],
    pub request_form: RequestFormView,
    pub contact_email: String,
}

impl HomeTemplate {
    /// Landing page around the given request form state.
    #[must_use]
    pub fn new(state: &AppState, request_form: RequestFormView) -> Self {
        Self {
            services: SERVICES,
            benefits: BENEFITS,
            testimonials: TESTIMONIALS,
            request_form,
            contact_email: state.email().operator_address().to_string(),
        }
    }
}

/// Display the landing page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> HomeTemplate {
    HomeTemplate::new(&state, RequestFormView::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_cover_every_package() {
        let packages: Vec<_> = SERVICES.iter().map(|card| card.package).collect();
        assert_eq!(packages, WebsitePackage::ALL);
        assert_eq!(SERVICES.iter().filter(|card| card.popular).count(), 1);
    }

    #[test]
    fn test_checkout_url() {
        assert_eq!(
            SERVICES[2].checkout_url(),
            "/checkout?package=maintenance"
        );
    }

    #[test]
    fn test_testimonial_initial() {
        assert_eq!(TESTIMONIALS[1].initial(), 'M');
    }
}
