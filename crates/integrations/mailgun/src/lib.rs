//! Mailgun provider for mailbridge.
//!
//! Implements [`EmailProvider`](mailbridge_provider::EmailProvider) against
//! the [Mailgun messages API](https://documentation.mailgun.com/docs/mailgun/api-reference/openapi-final/tag/Messages/),
//! posting form-encoded messages to `{base}/{domain}/messages` with HTTP
//! basic auth.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use mailbridge_mailgun::{MailgunConfig, MailgunProvider};
//!
//! let config = MailgunConfig::new("key-xxxxx").with_domain("mg.example.com");
//! let provider = MailgunProvider::new(config).expect("valid config");
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod simulator;
pub mod types;

pub use config::MailgunConfig;
pub use error::MailgunError;
pub use provider::MailgunProvider;
pub use types::MailgunMessageRequest;
