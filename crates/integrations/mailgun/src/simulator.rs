//! Deterministic stand-in for the Mailgun messages endpoint.
//!
//! The request is the serialized
//! [`MailgunMessageRequest`](crate::types::MailgunMessageRequest) with the
//! credential injected under `auth_key`.

use serde_json::{Value, json};
use tracing::debug;

/// Phrase Mailgun returns when a message has been accepted.
pub const QUEUED_MESSAGE: &str = "Queued. Thank you.";

/// Recipient that makes the simulator reject the message.
pub const ERROR_RECIPIENT: &str = "error@mailgun.com";

/// Subject that makes the simulator report an internal failure.
pub const ERROR_SUBJECT: &str = "error_trigger_mailgun";

/// Produce the response Mailgun would return for `request`.
pub fn respond(request: &Value) -> Value {
    debug!(
        has_auth_key = request.get("auth_key").is_some(),
        "simulated Mailgun call"
    );

    let Some(recipient) = field(request, "to") else {
        return failure("Recipient not specified");
    };
    if field(request, "from").is_none() {
        return failure("Sender not specified");
    }
    let Some(subject) = field(request, "subject") else {
        return failure("Subject not specified");
    };
    if field(request, "text").is_none() && field(request, "html").is_none() {
        return failure("Message content not specified");
    }

    if recipient == ERROR_RECIPIENT {
        return failure("Simulated Mailgun API error: invalid address");
    }
    if subject == ERROR_SUBJECT {
        return failure("Simulated Mailgun API error: internal issue");
    }

    json!({
        "id": format!("<{}@mailgun.org>", uuid::Uuid::new_v4()),
        "message": QUEUED_MESSAGE,
    })
}

fn field<'a>(request: &'a Value, name: &str) -> Option<&'a str> {
    request
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn failure(message: &str) -> Value {
    json!({"message": message, "status": "failed"})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(to: &str, subject: &str) -> Value {
        json!({
            "from": "noreply@example.com",
            "to": to,
            "subject": subject,
            "text": "Hi",
            "auth_key": "MG.mock_mailgun_api_key_67890"
        })
    }

    #[test]
    fn success_returns_queued_id() {
        let resp = respond(&request("user@example.com", "Hello"));
        assert_eq!(resp["message"], QUEUED_MESSAGE);
        let id = resp["id"].as_str().unwrap();
        assert!(id.starts_with('<') && id.ends_with("@mailgun.org>"));
    }

    #[test]
    fn html_only_is_accepted() {
        let mut req = request("user@example.com", "Hello");
        req.as_object_mut().unwrap().remove("text");
        req["html"] = json!("<p>Hi</p>");
        assert_eq!(respond(&req)["message"], QUEUED_MESSAGE);
    }

    #[test]
    fn sentinels() {
        let resp = respond(&request(ERROR_RECIPIENT, "Hello"));
        assert_eq!(resp["status"], "failed");
        assert_eq!(
            resp["message"],
            "Simulated Mailgun API error: invalid address"
        );

        let resp = respond(&request("user@example.com", ERROR_SUBJECT));
        assert_eq!(resp["message"], "Simulated Mailgun API error: internal issue");
    }

    #[test]
    fn structural_checks_in_order() {
        assert_eq!(respond(&json!({}))["message"], "Recipient not specified");
        assert_eq!(
            respond(&json!({"to": "a@b.co"}))["message"],
            "Sender not specified"
        );
        assert_eq!(
            respond(&json!({"to": "a@b.co", "from": "c@d.co"}))["message"],
            "Subject not specified"
        );
        assert_eq!(
            respond(&json!({"to": "a@b.co", "from": "c@d.co", "subject": "x"}))["message"],
            "Message content not specified"
        );
    }
}
