use mailbridge_provider::EmailError;
use thiserror::Error;

/// Transport-level errors specific to the SendGrid provider.
///
/// These are internal errors that get converted into
/// [`EmailError::ProviderApi`] at the public API boundary.
#[derive(Debug, Error)]
pub enum SendGridError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// SendGrid answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The payload could not be encoded for transmission.
    #[error("failed to encode payload: {0}")]
    Encode(String),
}

impl From<SendGridError> for EmailError {
    fn from(err: SendGridError) -> Self {
        EmailError::ProviderApi(format!("SendGrid API request failed: {err}"))
    }
}
