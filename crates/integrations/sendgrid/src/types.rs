use serde::Serialize;

/// JSON request body for the SendGrid v3 mail send API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendGridMailRequest {
    pub personalizations: Vec<SendGridPersonalization>,
    pub from: SendGridAddress,
    pub subject: String,
    pub content: Vec<SendGridContent>,
}

/// One personalization block; mailbridge always sends exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendGridPersonalization {
    pub to: Vec<SendGridAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendGridAddress {
    pub email: String,
}

/// A body part tagged with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendGridContent {
    /// `text/plain` or `text/html`.
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}
