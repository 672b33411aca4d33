//! Name-based provider construction.

use std::fmt;
use std::str::FromStr;

use mailbridge_mailgun::MailgunProvider;
use mailbridge_provider::{DynEmailProvider, EmailError};
use mailbridge_sendgrid::SendGridProvider;
use tracing::debug;

use crate::settings::Settings;

/// Supported email providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    SendGrid,
    Mailgun,
}

impl ProviderKind {
    /// Every supported provider, in display order.
    pub const ALL: [Self; 2] = [Self::SendGrid, Self::Mailgun];

    /// Lowercase provider name as used in receipts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SendGrid => SendGridProvider::NAME,
            Self::Mailgun => MailgunProvider::NAME,
        }
    }

    /// Build a fresh provider of this kind from `settings`.
    pub fn build(self, settings: &Settings) -> Result<Box<dyn DynEmailProvider>, EmailError> {
        let provider: Box<dyn DynEmailProvider> = match self {
            Self::SendGrid => Box::new(SendGridProvider::new(settings.sendgrid_config())?),
            Self::Mailgun => Box::new(MailgunProvider::new(settings.mailgun_config())?),
        };
        Ok(provider)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = EmailError;

    /// Case-insensitive; surrounding whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EmailError::ProviderNotImplemented(s.to_owned()))
    }
}

/// Construct a new provider by name.
///
/// Every call returns an independent instance with an empty draft.
/// Unknown names fail with [`EmailError::ProviderNotImplemented`] carrying
/// the name exactly as given.
pub fn provider_factory(
    name: &str,
    settings: &Settings,
) -> Result<Box<dyn DynEmailProvider>, EmailError> {
    let kind: ProviderKind = name.parse()?;
    debug!(provider = %kind, "building email provider");
    kind.build(settings)
}
