//! Provider contract for mailbridge.
//!
//! Defines the message draft every provider owns, the shared validation
//! rules, the [`EmailProvider`] capability trait with its fixed send
//! [`pipeline`], and the [`EmailError`] taxonomy.

pub mod draft;
pub mod error;
pub mod limits;
pub mod pipeline;
pub mod provider;
pub mod receipt;
pub mod transport;
pub mod validate;

pub use draft::MessageDraft;
pub use error::EmailError;
pub use limits::ContentLimits;
pub use provider::{DynEmailProvider, EmailProvider};
pub use receipt::{DeliveryStatus, SendReceipt};
pub use transport::TransportMode;
