use serde::Serialize;

/// Form-encoded request body for the Mailgun messages API.
///
/// Absent bodies are omitted from the form entirely; Mailgun accepts a
/// message carrying both `text` and `html`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailgunMessageRequest {
    pub from: String,
    pub to: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_missing_bodies() {
        let req = MailgunMessageRequest {
            from: "noreply@example.com".into(),
            to: "user@example.com".into(),
            subject: "Hello".into(),
            text: Some("Hi".into()),
            html: None,
        };
        let encoded = serde_urlencoded::to_string(&req).unwrap();
        assert_eq!(
            encoded,
            "from=noreply%40example.com&to=user%40example.com&subject=Hello&text=Hi"
        );
    }
}
