/// The in-progress message held by a provider before it is sent.
///
/// The setters keep the body fields mutually exclusive: setting text content
/// clears any HTML content and vice versa. The fields stay public so a
/// provider can be handed a draft built elsewhere; providers decide how to
/// treat a draft that carries both bodies.
///
/// Empty strings are treated as unset by every accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    /// Recipient address.
    pub recipient: Option<String>,
    /// Sender address. Starts out as the configured default sender.
    pub sender: String,
    /// Subject line.
    pub subject: Option<String>,
    /// Plain-text body.
    pub text_content: Option<String>,
    /// HTML body.
    pub html_content: Option<String>,
}

impl MessageDraft {
    /// Create an empty draft that sends from `default_sender`.
    pub fn new(default_sender: impl Into<String>) -> Self {
        Self {
            sender: default_sender.into(),
            ..Self::default()
        }
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the plain-text body, clearing any HTML body.
    pub fn set_text_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.text_content = Some(content.into());
        self.html_content = None;
        self
    }

    /// Set the HTML body, clearing any plain-text body.
    pub fn set_html_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.html_content = Some(content.into());
        self.text_content = None;
        self
    }

    /// Override the default sender address.
    pub fn set_sender_address(&mut self, sender: impl Into<String>) -> &mut Self {
        self.sender = sender.into();
        self
    }

    pub fn recipient(&self) -> Option<&str> {
        non_empty(self.recipient.as_deref())
    }

    pub fn subject(&self) -> Option<&str> {
        non_empty(self.subject.as_deref())
    }

    pub fn text(&self) -> Option<&str> {
        non_empty(self.text_content.as_deref())
    }

    pub fn html(&self) -> Option<&str> {
        non_empty(self.html_content.as_deref())
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns `true` if at least one of the two bodies is non-empty.
    pub fn has_content(&self) -> bool {
        self.text().is_some() || self.html().is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
