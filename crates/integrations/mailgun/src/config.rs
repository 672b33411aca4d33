use std::time::Duration;

use mailbridge_provider::ContentLimits;

/// Default Mailgun API base URL (US region).
pub const DEFAULT_API_BASE_URL: &str = "https://api.mailgun.net/v3/";

/// Sending domain used when none is configured.
pub const DEFAULT_DOMAIN: &str = "sandbox.mailgun.org";

/// Configuration for the Mailgun provider.
#[derive(Clone)]
pub struct MailgunConfig {
    /// Private API key, sent as the password of HTTP basic auth with the
    /// fixed user `api`. An empty key, or one containing the
    /// `DEFAULT_WARNING` placeholder marker, routes sends to the simulator.
    pub api_key: String,

    /// API base URL. The messages endpoint is `{base}/{domain}/messages`.
    pub api_base_url: String,

    /// Sending domain registered with Mailgun.
    pub domain: String,

    /// Sender address every new draft starts with.
    pub default_sender: String,

    /// Force the simulated responder even when a real key is configured.
    pub simulate: bool,

    /// Length limits enforced during validation.
    pub limits: ContentLimits,

    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for MailgunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailgunConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("domain", &self.domain)
            .field("default_sender", &self.default_sender)
            .field("simulate", &self.simulate)
            .field("limits", &self.limits)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MailgunConfig {
    /// Create a configuration with the given API key.
    ///
    /// Uses the US API region, the sandbox domain, `noreply@example.com` as
    /// default sender, default limits and a 30 second timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            domain: DEFAULT_DOMAIN.to_owned(),
            default_sender: "noreply@example.com".to_owned(),
            simulate: false,
            limits: ContentLimits::default(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the API base URL (useful for testing or the EU region).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    #[must_use]
    pub fn with_default_sender(mut self, sender: impl Into<String>) -> Self {
        self.default_sender = sender.into();
        self
    }

    #[must_use]
    pub fn with_simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ContentLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the messages endpoint for the configured domain.
    pub fn messages_url(&self) -> String {
        format!(
            "{}/{}/messages",
            self.api_base_url.trim_end_matches('/'),
            self.domain
        )
    }
}
