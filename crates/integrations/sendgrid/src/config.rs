use std::time::Duration;

use mailbridge_provider::ContentLimits;

/// Default SendGrid v3 mail send endpoint.
pub const DEFAULT_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Configuration for the SendGrid provider.
#[derive(Clone)]
pub struct SendGridConfig {
    /// API key sent as a bearer token. An empty key, or one containing the
    /// `DEFAULT_WARNING` placeholder marker, routes sends to the simulator.
    pub api_key: String,

    /// Full URL of the mail send endpoint. Override this for testing against
    /// a mock server.
    pub api_url: String,

    /// Sender address every new draft starts with.
    pub default_sender: String,

    /// Force the simulated responder even when a real key is configured.
    pub simulate: bool,

    /// Length limits enforced during validation.
    pub limits: ContentLimits,

    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for SendGridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("default_sender", &self.default_sender)
            .field("simulate", &self.simulate)
            .field("limits", &self.limits)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SendGridConfig {
    /// Create a configuration with the given API key.
    ///
    /// Uses the public SendGrid endpoint, `noreply@example.com` as default
    /// sender, default limits and a 30 second timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_owned(),
            default_sender: "noreply@example.com".to_owned(),
            simulate: false,
            limits: ContentLimits::default(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the endpoint URL (useful for testing).
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
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
}
