use thiserror::Error;

/// Errors raised while configuring, validating, or sending an email.
///
/// Validation variants are always produced before any network activity, so
/// a validation failure guarantees nothing was transmitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// A required draft field (`recipient`, `subject`, or `content`) is unset.
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// A recipient or sender address is malformed or too long.
    #[error("invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// The subject exceeds the configured length limit.
    #[error("invalid subject: {0}")]
    InvalidSubject(String),

    /// The body is too long or combines content types the provider rejects.
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// The provider API (real or simulated) reported a failure, returned an
    /// unrecognized response, or could not be reached.
    #[error("provider API error: {0}")]
    ProviderApi(String),

    /// No provider is registered under the requested name.
    #[error("email provider '{0}' is not implemented")]
    ProviderNotImplemented(String),

    /// Settings could not be loaded or a client could not be built from them.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl EmailError {
    /// Returns `true` for failures detected while validating the draft.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredField(_)
                | Self::InvalidEmailAddress(_)
                | Self::InvalidSubject(_)
                | Self::InvalidContent(_)
        )
    }
}
