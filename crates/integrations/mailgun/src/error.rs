use mailbridge_provider::EmailError;
use thiserror::Error;

/// Transport-level errors specific to the Mailgun provider.
///
/// Converted into [`EmailError::ProviderApi`] at the public API boundary.
#[derive(Debug, Error)]
pub enum MailgunError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Mailgun answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("failed to encode payload: {0}")]
    Encode(String),
}

impl From<MailgunError> for EmailError {
    fn from(err: MailgunError) -> Self {
        EmailError::ProviderApi(format!("Mailgun API request failed: {err}"))
    }
}
