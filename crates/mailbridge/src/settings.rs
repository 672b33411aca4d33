//! Environment-driven settings shared by every provider.

use std::str::FromStr;
use std::time::Duration;

use mailbridge_mailgun::MailgunConfig;
use mailbridge_mailgun::config::{DEFAULT_API_BASE_URL, DEFAULT_DOMAIN};
use mailbridge_provider::{ContentLimits, EmailError};
use mailbridge_sendgrid::SendGridConfig;
use mailbridge_sendgrid::config::DEFAULT_API_URL;

/// Placeholder SendGrid key used when `SENDGRID_API_KEY` is unset.
pub const PLACEHOLDER_SENDGRID_API_KEY: &str = "SG.mock_sendgrid_api_key_12345_DEFAULT_WARNING";

/// Placeholder Mailgun key used when `MAILGUN_API_KEY` is unset.
pub const PLACEHOLDER_MAILGUN_API_KEY: &str = "MG.mock_mailgun_api_key_67890_DEFAULT_WARNING";

pub const DEFAULT_SENDER_EMAIL: &str = "noreply@example.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process-wide mail settings.
///
/// Built once, then passed by reference to
/// [`provider_factory`](crate::provider_factory). Placeholder keys carry the
/// `DEFAULT_WARNING` marker, so an unconfigured provider sends through its
/// simulator.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub sendgrid_api_key: String,
    pub mailgun_api_key: String,
    pub sendgrid_api_url: String,
    pub mailgun_api_base_url: String,
    pub mailgun_domain: String,
    pub default_sender: String,
    pub simulate_sendgrid: bool,
    pub simulate_mailgun: bool,
    pub limits: ContentLimits,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("sendgrid_api_key", &"[REDACTED]")
            .field("mailgun_api_key", &"[REDACTED]")
            .field("sendgrid_api_url", &self.sendgrid_api_url)
            .field("mailgun_api_base_url", &self.mailgun_api_base_url)
            .field("mailgun_domain", &self.mailgun_domain)
            .field("default_sender", &self.default_sender)
            .field("simulate_sendgrid", &self.simulate_sendgrid)
            .field("simulate_mailgun", &self.simulate_mailgun)
            .field("limits", &self.limits)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sendgrid_api_key: PLACEHOLDER_SENDGRID_API_KEY.to_owned(),
            mailgun_api_key: PLACEHOLDER_MAILGUN_API_KEY.to_owned(),
            sendgrid_api_url: DEFAULT_API_URL.to_owned(),
            mailgun_api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            mailgun_domain: DEFAULT_DOMAIN.to_owned(),
            default_sender: DEFAULT_SENDER_EMAIL.to_owned(),
            simulate_sendgrid: false,
            simulate_mailgun: false,
            limits: ContentLimits::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Create settings from environment variables.
    ///
    /// Reads:
    /// - `SENDGRID_API_KEY`, `MAILGUN_API_KEY` (placeholders when unset)
    /// - `SENDGRID_API_URL`, `MAILGUN_API_BASE_URL`, `MAILGUN_DOMAIN`
    /// - `DEFAULT_SENDER_EMAIL`
    /// - `USE_FAKE_API_SENDGRID`, `USE_FAKE_API_MAILGUN` (booleans)
    /// - `MAX_EMAIL_ADDRESS_LENGTH`, `MAX_SUBJECT_LENGTH`,
    ///   `MAX_TEXT_CONTENT_LENGTH`, `MAX_HTML_CONTENT_LENGTH`
    /// - `MAILBRIDGE_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, EmailError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create settings from an arbitrary variable lookup.
    ///
    /// Absent variables take their defaults. A present but malformed number
    /// or boolean is an [`EmailError::Configuration`] naming the variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EmailError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let string = |name: &str, default: String| lookup(name).unwrap_or(default);

        let limits = ContentLimits {
            max_address_length: number(
                &lookup,
                "MAX_EMAIL_ADDRESS_LENGTH",
                defaults.limits.max_address_length,
            )?,
            max_subject_length: number(
                &lookup,
                "MAX_SUBJECT_LENGTH",
                defaults.limits.max_subject_length,
            )?,
            max_text_length: number(
                &lookup,
                "MAX_TEXT_CONTENT_LENGTH",
                defaults.limits.max_text_length,
            )?,
            max_html_length: number(
                &lookup,
                "MAX_HTML_CONTENT_LENGTH",
                defaults.limits.max_html_length,
            )?,
        };

        let timeout_secs = number(
            &lookup,
            "MAILBRIDGE_REQUEST_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            sendgrid_api_key: string("SENDGRID_API_KEY", defaults.sendgrid_api_key),
            mailgun_api_key: string("MAILGUN_API_KEY", defaults.mailgun_api_key),
            sendgrid_api_url: string("SENDGRID_API_URL", defaults.sendgrid_api_url),
            mailgun_api_base_url: string("MAILGUN_API_BASE_URL", defaults.mailgun_api_base_url),
            mailgun_domain: string("MAILGUN_DOMAIN", defaults.mailgun_domain),
            default_sender: string("DEFAULT_SENDER_EMAIL", defaults.default_sender),
            simulate_sendgrid: flag(&lookup, "USE_FAKE_API_SENDGRID")?,
            simulate_mailgun: flag(&lookup, "USE_FAKE_API_MAILGUN")?,
            limits,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Configuration for a new SendGrid provider.
    pub fn sendgrid_config(&self) -> SendGridConfig {
        SendGridConfig::new(self.sendgrid_api_key.clone())
            .with_api_url(self.sendgrid_api_url.clone())
            .with_default_sender(self.default_sender.clone())
            .with_simulate(self.simulate_sendgrid)
            .with_limits(self.limits)
            .with_timeout(self.request_timeout)
    }

    /// Configuration for a new Mailgun provider.
    pub fn mailgun_config(&self) -> MailgunConfig {
        MailgunConfig::new(self.mailgun_api_key.clone())
            .with_api_base_url(self.mailgun_api_base_url.clone())
            .with_domain(self.mailgun_domain.clone())
            .with_default_sender(self.default_sender.clone())
            .with_simulate(self.simulate_mailgun)
            .with_limits(self.limits)
            .with_timeout(self.request_timeout)
    }
}

fn number<F, T>(lookup: &F, name: &str, default: T) -> Result<T, EmailError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            EmailError::Configuration(format!("{name} must be a non-negative integer, got '{raw}'"))
        }),
    }
}

fn flag<F>(lookup: &F, name: &str) -> Result<bool, EmailError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(EmailError::Configuration(format!(
            "{name} must be true or false, got '{raw}'"
        ))),
    }
}
