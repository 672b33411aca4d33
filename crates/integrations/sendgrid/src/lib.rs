//! SendGrid provider for mailbridge.
//!
//! This crate implements [`EmailProvider`](mailbridge_provider::EmailProvider)
//! on top of the [SendGrid v3 mail send API](https://www.twilio.com/docs/sendgrid/api-reference/mail-send/mail-send).
//! Without a usable API key, or with `simulate` set, sends are answered by
//! the in-process [`simulator`] instead.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use mailbridge_provider::DynEmailProvider;
//! use mailbridge_sendgrid::{SendGridConfig, SendGridProvider};
//!
//! # async fn run() -> Result<(), mailbridge_provider::EmailError> {
//! let config = SendGridConfig::new("SG.xxxxx").with_default_sender("noreply@example.com");
//! let mut provider = SendGridProvider::new(config)?;
//! let receipt = provider
//!     .set_recipient("user@example.com")
//!     .set_subject("Hello")
//!     .set_text_content("Hi")
//!     .send()
//!     .await?;
//! println!("{}", receipt.message_id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod simulator;
pub mod types;

pub use config::SendGridConfig;
pub use error::SendGridError;
pub use provider::SendGridProvider;
pub use types::SendGridMailRequest;
