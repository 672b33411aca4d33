use serde::{Deserialize, Serialize};

/// Length limits applied by provider-specific validation.
///
/// All limits count characters (Unicode scalar values), not bytes. A value
/// whose length equals the limit is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLimits {
    /// Maximum length of the recipient and sender addresses.
    pub max_address_length: usize,
    /// Maximum length of the subject line.
    pub max_subject_length: usize,
    /// Maximum length of the plain-text body.
    pub max_text_length: usize,
    /// Maximum length of the HTML body.
    pub max_html_length: usize,
}

impl ContentLimits {
    pub const DEFAULT_MAX_ADDRESS_LENGTH: usize = 254;
    pub const DEFAULT_MAX_SUBJECT_LENGTH: usize = 255;
    pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;
    pub const DEFAULT_MAX_HTML_LENGTH: usize = 50_000;

    #[must_use]
    pub fn with_max_address_length(mut self, max: usize) -> Self {
        self.max_address_length = max;
        self
    }

    #[must_use]
    pub fn with_max_subject_length(mut self, max: usize) -> Self {
        self.max_subject_length = max;
        self
    }

    #[must_use]
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = max;
        self
    }

    #[must_use]
    pub fn with_max_html_length(mut self, max: usize) -> Self {
        self.max_html_length = max;
        self
    }
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_address_length: Self::DEFAULT_MAX_ADDRESS_LENGTH,
            max_subject_length: Self::DEFAULT_MAX_SUBJECT_LENGTH,
            max_text_length: Self::DEFAULT_MAX_TEXT_LENGTH,
            max_html_length: Self::DEFAULT_MAX_HTML_LENGTH,
        }
    }
}
