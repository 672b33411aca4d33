//! Deterministic stand-in for the SendGrid mail send endpoint.
//!
//! Used when no real API key is configured or simulation is forced. The
//! request is the serialized [`SendGridMailRequest`](crate::types::SendGridMailRequest)
//! with the credential injected under `api_key`.

use serde_json::{Value, json};
use tracing::debug;

/// Recipient that makes the simulator reject the message.
pub const ERROR_RECIPIENT: &str = "error@example.com";

/// Subject that makes the simulator report an internal failure.
pub const ERROR_SUBJECT: &str = "error_trigger_sendgrid";

/// Produce the response SendGrid would return for `request`.
pub fn respond(request: &Value) -> Value {
    debug!(
        has_api_key = request.get("api_key").is_some(),
        "simulated SendGrid call"
    );

    let Some(recipient) = non_empty(request.pointer("/personalizations/0/to/0/email")) else {
        return failure("Missing recipient");
    };
    if non_empty(request.pointer("/from/email")).is_none() {
        return failure("Missing sender");
    }
    let Some(subject) = non_empty(request.get("subject")) else {
        return failure("Missing subject");
    };
    if non_empty(request.pointer("/content/0/value")).is_none() {
        return failure("Missing content");
    }

    if recipient == ERROR_RECIPIENT {
        return failure("Simulated SendGrid API error: invalid recipient");
    }
    if subject == ERROR_SUBJECT {
        return failure("Simulated SendGrid API error: internal server error");
    }

    json!({
        "messages": [
            {"id": uuid::Uuid::new_v4().to_string(), "status": "queued"}
        ]
    })
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn failure(message: &str) -> Value {
    json!({"errors": [{"message": message}]})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(to: &str, subject: &str, value: &str) -> Value {
        json!({
            "personalizations": [{"to": [{"email": to}]}],
            "from": {"email": "noreply@example.com"},
            "subject": subject,
            "content": [{"type": "text/plain", "value": value}],
            "api_key": "SG.mock_sendgrid_api_key_12345"
        })
    }

    #[test]
    fn success_returns_queued_message() {
        let resp = respond(&request("user@example.com", "Hello", "Hi"));
        assert_eq!(resp["messages"][0]["status"], "queued");
        let id = resp["messages"][0]["id"].as_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn ids_are_unique() {
        let a = respond(&request("user@example.com", "Hello", "Hi"));
        let b = respond(&request("user@example.com", "Hello", "Hi"));
        assert_ne!(a["messages"][0]["id"], b["messages"][0]["id"]);
    }

    #[test]
    fn sentinel_recipient() {
        let resp = respond(&request(ERROR_RECIPIENT, "Hello", "Hi"));
        assert_eq!(
            resp["errors"][0]["message"],
            "Simulated SendGrid API error: invalid recipient"
        );
    }

    #[test]
    fn sentinel_subject() {
        let resp = respond(&request("user@example.com", ERROR_SUBJECT, "Hi"));
        assert_eq!(
            resp["errors"][0]["message"],
            "Simulated SendGrid API error: internal server error"
        );
    }

    #[test]
    fn structural_checks_in_order() {
        assert_eq!(
            respond(&json!({}))["errors"][0]["message"],
            "Missing recipient"
        );

        let mut req = request("user@example.com", "Hello", "Hi");
        req["from"] = json!({});
        assert_eq!(respond(&req)["errors"][0]["message"], "Missing sender");

        let mut req = request("user@example.com", "", "Hi");
        req["from"] = json!({"email": "noreply@example.com"});
        assert_eq!(respond(&req)["errors"][0]["message"], "Missing subject");

        let req = request("user@example.com", "Hello", "");
        assert_eq!(respond(&req)["errors"][0]["message"], "Missing content");
    }
}
