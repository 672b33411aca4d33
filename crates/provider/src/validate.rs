//! Validation rules shared by every provider.
//!
//! [`validate_draft`] holds the base rules that always run first. Providers
//! layer their own rules on top, usually finishing with [`enforce_limits`].

use std::sync::LazyLock;

use regex::Regex;

use crate::draft::MessageDraft;
use crate::error::EmailError;
use crate::limits::ContentLimits;

/// Minimal `local@domain.tld` shape: something, `@`, something, `.`,
/// something, with no further `@`. Deliberately permissive so that unicode
/// local parts and domains pass.
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[^@]+@[^@]+\.[^@]+\z").expect("address regex is valid"));

/// Returns `true` if `address` has the minimal `local@domain.tld` shape.
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// Run the base validation rules against a draft.
///
/// Required fields are checked in a fixed order (recipient, subject,
/// content), then the recipient and sender address shapes.
pub fn validate_draft(draft: &MessageDraft) -> Result<(), EmailError> {
    let Some(recipient) = draft.recipient() else {
        return Err(EmailError::MissingRequiredField("recipient".into()));
    };
    if draft.subject().is_none() {
        return Err(EmailError::MissingRequiredField("subject".into()));
    }
    if !draft.has_content() {
        return Err(EmailError::MissingRequiredField("content".into()));
    }

    if !is_valid_address(recipient) {
        return Err(EmailError::InvalidEmailAddress(format!(
            "recipient '{recipient}' is not a valid address"
        )));
    }
    if !is_valid_address(draft.sender()) {
        return Err(EmailError::InvalidEmailAddress(format!(
            "sender '{}' is not a valid address",
            draft.sender()
        )));
    }

    Ok(())
}

/// Check the draft against the configured length limits.
///
/// Order: text body, HTML body, subject, recipient, sender. `provider` is the
/// display name used in error messages.
pub fn enforce_limits(
    draft: &MessageDraft,
    limits: &ContentLimits,
    provider: &str,
) -> Result<(), EmailError> {
    if let Some(text) = draft.text() {
        if char_len(text) > limits.max_text_length {
            return Err(EmailError::InvalidContent(format!(
                "text content too long for {provider} (max {} chars)",
                limits.max_text_length
            )));
        }
    }
    if let Some(html) = draft.html() {
        if char_len(html) > limits.max_html_length {
            return Err(EmailError::InvalidContent(format!(
                "HTML content too long for {provider} (max {} chars)",
                limits.max_html_length
            )));
        }
    }
    if let Some(subject) = draft.subject() {
        if char_len(subject) > limits.max_subject_length {
            return Err(EmailError::InvalidSubject(format!(
                "subject too long for {provider} (max {} chars)",
                limits.max_subject_length
            )));
        }
    }
    if let Some(recipient) = draft.recipient() {
        if char_len(recipient) > limits.max_address_length {
            return Err(EmailError::InvalidEmailAddress(format!(
                "recipient address too long (max {} chars)",
                limits.max_address_length
            )));
        }
    }
    if char_len(draft.sender()) > limits.max_address_length {
        return Err(EmailError::InvalidEmailAddress(format!(
            "sender address too long (max {} chars)",
            limits.max_address_length
        )));
    }
    Ok(())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> MessageDraft {
        let mut draft = MessageDraft::new("noreply@example.com");
        draft
            .set_recipient("user@example.com")
            .set_subject("Hello")
            .set_text_content("Hi");
        draft
    }

    #[test]
    fn address_shapes() {
        assert!(is_valid_address("user@example.com"));
        assert!(is_valid_address("first.last@sub.example.co.uk"));
        assert!(is_valid_address("user.ünicode@éxample.com"));
        assert!(!is_valid_address("invalid-email"));
        assert!(!is_valid_address("user@localhost"));
        assert!(!is_valid_address("@example.com"));
        assert!(!is_valid_address("user@.com"));
        assert!(!is_valid_address("user@example."));
        assert!(!is_valid_address("a@b@c.com"));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn required_fields_checked_in_order() {
        let mut draft = MessageDraft::new("noreply@example.com");
        assert_eq!(
            validate_draft(&draft),
            Err(EmailError::MissingRequiredField("recipient".into()))
        );

        draft.set_recipient("user@example.com");
        assert_eq!(
            validate_draft(&draft),
            Err(EmailError::MissingRequiredField("subject".into()))
        );

        draft.set_subject("Hello");
        assert_eq!(
            validate_draft(&draft),
            Err(EmailError::MissingRequiredField("content".into()))
        );

        draft.set_html_content("<p>Hi</p>");
        assert_eq!(validate_draft(&draft), Ok(()));
    }

    #[test]
    fn missing_fields_win_over_bad_addresses() {
        let mut draft = MessageDraft::new("bad-sender");
        draft.set_recipient("bad-recipient");
        assert_eq!(
            validate_draft(&draft),
            Err(EmailError::MissingRequiredField("subject".into()))
        );
    }

    #[test]
    fn invalid_recipient() {
        let mut draft = complete_draft();
        draft.set_recipient("invalid-email");
        let err = validate_draft(&draft).unwrap_err();
        assert!(matches!(err, EmailError::InvalidEmailAddress(ref m) if m.contains("recipient")));
    }

    #[test]
    fn invalid_sender() {
        let mut draft = complete_draft();
        draft.set_sender_address("bad-sender");
        let err = validate_draft(&draft).unwrap_err();
        assert!(matches!(err, EmailError::InvalidEmailAddress(ref m) if m.contains("sender")));
    }

    #[test]
    fn text_at_limit_passes() {
        let limits = ContentLimits::default().with_max_text_length(5);
        let mut draft = complete_draft();
        draft.set_text_content("12345");
        assert!(enforce_limits(&draft, &limits, "Test").is_ok());

        draft.set_text_content("123456");
        let err = enforce_limits(&draft, &limits, "Test").unwrap_err();
        assert_eq!(
            err,
            EmailError::InvalidContent("text content too long for Test (max 5 chars)".into())
        );
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        let limits = ContentLimits::default().with_max_text_length(3);
        let mut draft = complete_draft();
        draft.set_text_content("éàü");
        assert!(enforce_limits(&draft, &limits, "Test").is_ok());
    }

    #[test]
    fn html_over_limit() {
        let limits = ContentLimits::default().with_max_html_length(4);
        let mut draft = complete_draft();
        draft.set_html_content("<p>x</p>");
        let err = enforce_limits(&draft, &limits, "Test").unwrap_err();
        assert!(matches!(err, EmailError::InvalidContent(_)));
    }

    #[test]
    fn subject_over_limit() {
        let limits = ContentLimits::default().with_max_subject_length(3);
        let mut draft = complete_draft();
        draft.set_subject("Long");
        let err = enforce_limits(&draft, &limits, "Test").unwrap_err();
        assert!(matches!(err, EmailError::InvalidSubject(_)));
    }

    #[test]
    fn addresses_over_limit() {
        let limits = ContentLimits::default().with_max_address_length(16);
        let mut draft = complete_draft();
        draft.set_recipient("user@example.com");
        draft.set_sender_address("a@b.co");
        assert!(enforce_limits(&draft, &limits, "Test").is_ok());

        draft.set_recipient("longer@example.com");
        let err = enforce_limits(&draft, &limits, "Test").unwrap_err();
        assert!(matches!(err, EmailError::InvalidEmailAddress(ref m) if m.contains("recipient")));

        draft.set_recipient("user@example.com");
        draft.set_sender_address("noreply@example.com");
        let err = enforce_limits(&draft, &limits, "Test").unwrap_err();
        assert!(matches!(err, EmailError::InvalidEmailAddress(ref m) if m.contains("sender")));
    }
}
