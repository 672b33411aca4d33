use mailbridge_provider::transport::simulator_credential;
use mailbridge_provider::validate::{enforce_limits, validate_draft};
use mailbridge_provider::{EmailError, EmailProvider, MessageDraft, SendReceipt, TransportMode};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, info, instrument};

use crate::config::SendGridConfig;
use crate::error::SendGridError;
use crate::simulator;
use crate::types::{
    SendGridAddress, SendGridContent, SendGridMailRequest, SendGridPersonalization,
};

/// Placeholder message id used when SendGrid acknowledges without one.
const MISSING_MESSAGE_ID: &str = "N/A";

/// SendGrid provider that sends mail via the v3 JSON API.
///
/// Owns a single [`MessageDraft`]; configure it through the
/// [`DynEmailProvider`](mailbridge_provider::DynEmailProvider) setters and
/// call `send`. Unlike Mailgun, SendGrid refuses a draft that carries both a
/// text and an HTML body.
pub struct SendGridProvider {
    config: SendGridConfig,
    client: Client,
    draft: MessageDraft,
}

impl std::fmt::Debug for SendGridProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridProvider")
            .field("config", &self.config)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl SendGridProvider {
    /// Provider name reported in receipts and accepted by the factory.
    pub const NAME: &'static str = "sendgrid";

    /// Create a new SendGrid provider with the given configuration.
    ///
    /// Builds a `reqwest::Client` using the configured timeout.
    pub fn new(config: SendGridConfig) -> Result<Self, EmailError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmailError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(config, client))
    }

    /// Create a new SendGrid provider with a custom HTTP client.
    pub fn with_client(config: SendGridConfig, client: Client) -> Self {
        let draft = MessageDraft::new(config.default_sender.clone());
        Self {
            config,
            client,
            draft,
        }
    }

    pub fn config(&self) -> &SendGridConfig {
        &self.config
    }

    /// Hand the payload to the simulated responder with the credential
    /// injected.
    fn simulate(&self, payload: &SendGridMailRequest) -> Result<Value, SendGridError> {
        let mut request =
            serde_json::to_value(payload).map_err(|e| SendGridError::Encode(e.to_string()))?;
        if let Some(fields) = request.as_object_mut() {
            fields.insert(
                "api_key".to_owned(),
                Value::String(simulator_credential(&self.config.api_key)),
            );
        }
        Ok(simulator::respond(&request))
    }

    /// POST the payload to the real endpoint.
    ///
    /// SendGrid acknowledges with `202 Accepted` and an empty body, carrying
    /// the message id in `X-Message-Id`; that acknowledgement is rewritten
    /// into the regular `messages` shape.
    async fn post(&self, payload: &SendGridMailRequest) -> Result<Value, SendGridError> {
        debug!(url = %self.config.api_url, "posting mail to SendGrid");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendGridError::Status { status, body });
        }

        let message_id = response
            .headers()
            .get("x-message-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;

        if body.trim().is_empty() {
            let mut entry = json!({"status": "queued"});
            if let Some(id) = message_id {
                entry["id"] = Value::String(id);
            }
            return Ok(json!({"messages": [entry]}));
        }

        serde_json::from_str(&body).map_err(|e| SendGridError::Decode(e.to_string()))
    }
}

impl EmailProvider for SendGridProvider {
    type Payload = SendGridMailRequest;

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

        if self.draft.text().is_some() && self.draft.html().is_some() {
            return Err(EmailError::InvalidContent(
                "cannot set both plain text and HTML content for SendGrid".into(),
            ));
        }

        enforce_limits(&self.draft, &self.config.limits, "SendGrid")
    }

    fn prepare_payload(&self) -> SendGridMailRequest {
        let (content_type, value) = match self.draft.text() {
            Some(text) => ("text/plain", text),
            None => ("text/html", self.draft.html().unwrap_or_default()),
        };

        SendGridMailRequest {
            personalizations: vec![SendGridPersonalization {
                to: vec![SendGridAddress {
                    email: self.draft.recipient().unwrap_or_default().to_owned(),
                }],
            }],
            from: SendGridAddress {
                email: self.draft.sender().to_owned(),
            },
            subject: self.draft.subject().unwrap_or_default().to_owned(),
            content: vec![SendGridContent {
                content_type: content_type.to_owned(),
                value: value.to_owned(),
            }],
        }
    }

    #[instrument(skip(self, payload), fields(provider = "sendgrid"))]
    async fn send_request(&self, payload: &SendGridMailRequest) -> Result<Value, EmailError> {
        match TransportMode::select(self.config.simulate, &self.config.api_key) {
            TransportMode::Simulated => {
                info!("using simulated SendGrid responder");
                Ok(self.simulate(payload)?)
            }
            TransportMode::Live => {
                info!("sending via SendGrid API");
                Ok(self.post(payload).await?)
            }
        }
    }

    /// Each deciding field is read on its own, so an unrelated or mistyped
    /// sibling never changes the outcome.
    fn parse_response(&self, response: Value) -> Result<SendReceipt, EmailError> {
        let first_message = first_entry(&response, "messages");

        if first_message.and_then(|m| str_field(m, "status")) == Some("queued") {
            let id = first_message
                .and_then(|m| str_field(m, "id"))
                .unwrap_or(MISSING_MESSAGE_ID);
            return Ok(SendReceipt::sent(Self::NAME, id));
        }

        if let Some(first_error) = first_entry(&response, "errors") {
            let message =
                str_field(first_error, "message").unwrap_or("Unknown SendGrid API error.");
            return Err(EmailError::ProviderApi(format!(
                "SendGrid API error: {message}"
            )));
        }

        Err(EmailError::ProviderApi(format!(
            "unexpected SendGrid API response: {response}"
        )))
    }
}

/// First element of the array under `key`, if `key` holds a non-empty array.
fn first_entry<'a>(response: &'a Value, key: &str) -> Option<&'a Value> {
    response.get(key).and_then(Value::as_array).and_then(|a| a.first())
}

fn str_field<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}
