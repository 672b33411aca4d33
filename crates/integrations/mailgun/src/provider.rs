use mailbridge_provider::transport::simulator_credential;
use mailbridge_provider::validate::{enforce_limits, validate_draft};
use mailbridge_provider::{EmailError, EmailProvider, MessageDraft, SendReceipt, TransportMode};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::config::MailgunConfig;
use crate::error::MailgunError;
use crate::simulator::{self, QUEUED_MESSAGE};
use crate::types::MailgunMessageRequest;

/// Mailgun provider that sends mail via the form-encoded messages API.
///
/// A draft may carry both a text and an HTML body; Mailgun delivers them
/// as alternatives of one message.
pub struct MailgunProvider {
    config: MailgunConfig,
    client: Client,
    draft: MessageDraft,
}

impl std::fmt::Debug for MailgunProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailgunProvider")
            .field("config", &self.config)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl MailgunProvider {
    /// Provider name reported in receipts and accepted by the factory.
    pub const NAME: &'static str = "mailgun";

    /// Create a new Mailgun provider with the given configuration.
    pub fn new(config: MailgunConfig) -> Result<Self, EmailError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmailError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(config, client))
    }

    /// Create a new Mailgun provider with a custom HTTP client.
    pub fn with_client(config: MailgunConfig, client: Client) -> Self {
        let draft = MessageDraft::new(config.default_sender.clone());
        Self {
            config,
            client,
            draft,
        }
    }

    pub fn config(&self) -> &MailgunConfig {
        &self.config
    }

    fn simulate(&self, payload: &MailgunMessageRequest) -> Result<Value, MailgunError> {
        let mut request =
            serde_json::to_value(payload).map_err(|e| MailgunError::Encode(e.to_string()))?;
        if let Some(fields) = request.as_object_mut() {
            fields.insert(
                "auth_key".to_owned(),
                Value::String(simulator_credential(&self.config.api_key)),
            );
        }
        Ok(simulator::respond(&request))
    }

    async fn post(&self, payload: &MailgunMessageRequest) -> Result<Value, MailgunError> {
        let url = self.config.messages_url();
        debug!(%url, "posting mail to Mailgun");

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.config.api_key))
            .form(payload)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailgunError::Status { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MailgunError::Decode(e.to_string()))
    }
}

impl EmailProvider for MailgunProvider {
    type Payload = MailgunMessageRequest;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    fn draft_mut(&mut self) -> &mut MessageDraft {
        &mut self.draft
    }

    fn validate_input(&self) -> Result<(), EmailError> {
        validate_draft(&self.draft)?;
        enforce_limits(&self.draft, &self.config.limits, "Mailgun")
    }

    fn prepare_payload(&self) -> MailgunMessageRequest {
        MailgunMessageRequest {
            from: self.draft.sender().to_owned(),
            to: self.draft.recipient().unwrap_or_default().to_owned(),
            subject: self.draft.subject().unwrap_or_default().to_owned(),
            text: self.draft.text().map(str::to_owned),
            html: self.draft.html().map(str::to_owned),
        }
    }

    #[instrument(skip(self, payload), fields(provider = "mailgun", domain = %self.config.domain))]
    async fn send_request(&self, payload: &MailgunMessageRequest) -> Result<Value, EmailError> {
        match TransportMode::select(self.config.simulate, &self.config.api_key) {
            TransportMode::Simulated => {
                info!("using simulated Mailgun responder");
                Ok(self.simulate(payload)?)
            }
            TransportMode::Live => {
                info!("sending via Mailgun API");
                Ok(self.post(payload).await?)
            }
        }
    }

    /// Each deciding field is read on its own, so an unrelated or mistyped
    /// sibling never changes the outcome.
    fn parse_response(&self, response: Value) -> Result<SendReceipt, EmailError> {
        let message = str_field(&response, "message");

        if message == Some(QUEUED_MESSAGE) {
            if let Some(id) = str_field(&response, "id") {
                return Ok(SendReceipt::sent(Self::NAME, id));
            }
        }

        if let Some(message) = message.filter(|m| !m.is_empty()) {
            if str_field(&response, "status") == Some("failed") {
                return Err(EmailError::ProviderApi(format!(
                    "Mailgun API error: {message}"
                )));
            }
        }

        Err(EmailError::ProviderApi(format!(
            "unexpected Mailgun API response: {response}"
        )))
    }
}

fn str_field<'a>(response: &'a Value, key: &str) -> Option<&'a str> {
    response.get(key).and_then(Value::as_str)
}
