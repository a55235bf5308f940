//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SITE_BASE_URL` - Public URL for the site
//! - `SITE_OPERATOR_EMAIL` - Address that receives new website requests
//!
//! ## Optional
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_STATIC_DIR` - Directory served under `/static` (default: the crate's `static/`)
//! - `SITE_EMAIL_TRANSPORT` - `log` or `disabled` (default: log)
//! - `SITE_EMAIL_DELAY_MS` - Simulated delivery time per email (default: 1000)
//! - `SITE_PAYMENT_DELAY_MS` - Simulated payment processing time (default: 2000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;
use webify_core::Email;

const DEFAULT_EMAIL_DELAY_MS: u64 = 1000;
const DEFAULT_PAYMENT_DELAY_MS: u64 = 2000;
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How outgoing email is "delivered".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailTransportKind {
    /// Log the message and report success after the simulated delay.
    #[default]
    Log,
    /// Refuse every message. Exercises the submission failure path.
    Disabled,
}

impl FromStr for EmailTransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "disabled" => Ok(Self::Disabled),
            other => Err(format!("expected 'log' or 'disabled', got '{other}'")),
        }
    }
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: Url,
    /// Directory with CSS, JS and images
    pub static_dir: PathBuf,
    /// Outgoing email configuration
    pub email: EmailConfig,
    /// Simulated payment processing time
    pub payment_delay: Duration,
    /// Sentry configuration
    pub sentry: SentryConfig,
}

/// Outgoing email configuration.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Recipient of new website request notifications
    pub operator_address: Email,
    /// Delivery transport
    pub transport: EmailTransportKind,
    /// Simulated delivery time per message
    pub delay: Duration,
}

/// Sentry error tracking configuration.
///
/// Implements `Debug` manually to redact the DSN.
#[derive(Clone)]
pub struct SentryConfig {
    /// Sentry DSN (contains the project key)
    pub dsn: Option<SecretString>,
    /// Environment name reported with events
    pub environment: Option<String>,
    /// Error event sample rate (0.0 - 1.0)
    pub sample_rate: f32,
    /// Performance trace sample rate (0.0 - 1.0)
    pub traces_sample_rate: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            sample_rate: 1.0,
            traces_sample_rate: 0.0,
        }
    }
}

impl std::fmt::Debug for SentryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentryConfig")
            .field("dsn", &self.dsn.as_ref().map(|_| "[REDACTED]"))
            .field("environment", &self.environment)
            .field("sample_rate", &self.sample_rate)
            .field("traces_sample_rate", &self.traces_sample_rate)
            .finish()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or_default::<IpAddr>("SITE_HOST", "127.0.0.1")?;
        let port = parse_env_or_default::<u16>("SITE_PORT", "3000")?;
        let base_url = Url::parse(&get_required_env("SITE_BASE_URL")?).map_err(|e| {
            ConfigError::InvalidEnvVar("SITE_BASE_URL".to_string(), e.to_string())
        })?;
        let static_dir = PathBuf::from(get_env_or_default("SITE_STATIC_DIR", DEFAULT_STATIC_DIR));
        let payment_delay = get_duration_ms("SITE_PAYMENT_DELAY_MS", DEFAULT_PAYMENT_DELAY_MS)?;

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            email: EmailConfig::from_env()?,
            payment_delay,
            sentry: SentryConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let operator_address = Email::parse(&get_required_env("SITE_OPERATOR_EMAIL")?)
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SITE_OPERATOR_EMAIL".to_string(), e.to_string())
            })?;

        Ok(Self {
            operator_address,
            transport: parse_env_or_default("SITE_EMAIL_TRANSPORT", "log")?,
            delay: get_duration_ms("SITE_EMAIL_DELAY_MS", DEFAULT_EMAIL_DELAY_MS)?,
        })
    }
}

impl SentryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dsn: get_optional_env("SENTRY_DSN").map(SecretString::from),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sample_rate: parse_env_or_default("SENTRY_SAMPLE_RATE", "1.0")?,
            traces_sample_rate: parse_env_or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to a default.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Read a millisecond duration.
fn get_duration_ms(key: &str, default_ms: u64) -> Result<Duration, ConfigError> {
    let ms = parse_env_or_default::<u64>(key, &default_ms.to_string())?;
    Ok(Duration::from_millis(ms))
}
