use std::future::Future;

use async_trait::async_trait;
use serde::Serialize;

use crate::draft::MessageDraft;
use crate::error::EmailError;
use crate::pipeline;
use crate::receipt::SendReceipt;
use crate::validate::validate_draft;

/// Capability set every email provider implements.
///
/// The four steps are driven in a fixed order by [`pipeline::run`]:
/// validate, prepare, transmit, parse. Only validation, transmission and
/// parsing may fail; payload preparation runs after validation has already
/// guaranteed the required fields and is infallible.
///
/// This trait is **not** object-safe (it has an associated payload type and
/// native `async fn`). For dynamic dispatch use [`DynEmailProvider`], which
/// every `EmailProvider` implements through a blanket implementation.
pub trait EmailProvider: Send + Sync {
    /// Provider-specific request body built from the draft.
    type Payload: Serialize + Send + Sync;

    /// Stable lowercase provider name, reported in every [`SendReceipt`].
    fn name(&self) -> &'static str;

    fn draft(&self) -> &MessageDraft;

    fn draft_mut(&mut self) -> &mut MessageDraft;

    /// Validate the draft before anything is sent.
    ///
    /// The default runs the shared base rules only. Providers that override
    /// it must call [`validate_draft`] first and add their own rules after.
    fn validate_input(&self) -> Result<(), EmailError> {
        validate_draft(self.draft())
    }

    /// Build the provider-specific payload from the draft.
    fn prepare_payload(&self) -> Self::Payload;

    /// Transmit the payload and return the provider's raw response.
    fn send_request(
        &self,
        payload: &Self::Payload,
    ) -> impl Future<Output = Result<serde_json::Value, EmailError>> + Send;

    /// Map the provider's raw response onto a [`SendReceipt`].
    fn parse_response(&self, response: serde_json::Value) -> Result<SendReceipt, EmailError>;
}

/// Object-safe provider interface: chainable draft setters plus `send`.
///
/// Setters mutate the provider's draft and hand back the same instance so
/// configuration can be chained. You generally should not implement this
/// trait directly; implement [`EmailProvider`] and rely on the blanket
/// implementation.
#[async_trait]
pub trait DynEmailProvider: Send + Sync {
    /// Returns the provider name.
    fn provider_name(&self) -> &'static str;

    /// Read access to the current draft.
    fn message(&self) -> &MessageDraft;

    fn set_recipient(&mut self, recipient: &str) -> &mut dyn DynEmailProvider;

    fn set_subject(&mut self, subject: &str) -> &mut dyn DynEmailProvider;

    /// Set the plain-text body. Clears any HTML body.
    fn set_text_content(&mut self, content: &str) -> &mut dyn DynEmailProvider;

    /// Set the HTML body. Clears any plain-text body.
    fn set_html_content(&mut self, content: &str) -> &mut dyn DynEmailProvider;

    fn set_sender_address(&mut self, sender: &str) -> &mut dyn DynEmailProvider;

    /// Validate, prepare, transmit and parse, in that order.
    ///
    /// The draft is left untouched afterwards, so a second call sends the
    /// same message again.
    async fn send(&self) -> Result<SendReceipt, EmailError>;
}

#[async_trait]
impl<T: EmailProvider> DynEmailProvider for T {
    fn provider_name(&self) -> &'static str {
        EmailProvider::name(self)
    }

    fn message(&self) -> &MessageDraft {
        self.draft()
    }

    fn set_recipient(&mut self, recipient: &str) -> &mut dyn DynEmailProvider {
        self.draft_mut().set_recipient(recipient);
        self
    }

    fn set_subject(&mut self, subject: &str) -> &mut dyn DynEmailProvider {
        self.draft_mut().set_subject(subject);
        self
    }

    fn set_text_content(&mut self, content: &str) -> &mut dyn DynEmailProvider {
        self.draft_mut().set_text_content(content);
        self
    }

    fn set_html_content(&mut self, content: &str) -> &mut dyn DynEmailProvider {
        self.draft_mut().set_html_content(content);
        self
    }

    fn set_sender_address(&mut self, sender: &str) -> &mut dyn DynEmailProvider {
        self.draft_mut().set_sender_address(sender);
        self
    }

    async fn send(&self) -> Result<SendReceipt, EmailError> {
        pipeline::run(self).await
    }
}
