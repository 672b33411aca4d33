//! Unified email sending over SendGrid and Mailgun.
//!
//! Pick a provider by name with [`provider_factory`], fill the draft with the
//! chained setters and `send` it:
//!
//! ```rust,no_run
//! use mailbridge::{Settings, provider_factory};
//!
//! # async fn run() -> Result<(), mailbridge::EmailError> {
//! let settings = Settings::from_env()?;
//! let mut provider = provider_factory("sendgrid", &settings)?;
//! let receipt = provider
//!     .set_recipient("user@example.com")
//!     .set_subject("Hello")
//!     .set_text_content("Hi")
//!     .send()
//!     .await?;
//! assert_eq!(receipt.provider, "sendgrid");
//! # Ok(())
//! # }
//! ```
//!
//! Without real API keys both providers answer through their in-process
//! simulators.

pub mod factory;
pub mod settings;

pub use factory::{ProviderKind, provider_factory};
pub use settings::Settings;

pub use mailbridge_mailgun::{MailgunConfig, MailgunProvider};
pub use mailbridge_provider::{
    ContentLimits, DeliveryStatus, DynEmailProvider, EmailError, EmailProvider, MessageDraft,
    SendReceipt, TransportMode,
};
pub use mailbridge_sendgrid::{SendGridConfig, SendGridProvider};
