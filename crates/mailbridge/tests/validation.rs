//! Validation behaviour shared by every provider built through the factory.

use mailbridge::{
    ContentLimits, DynEmailProvider, EmailError, EmailProvider, MailgunProvider, ProviderKind,
    SendGridProvider, Settings, provider_factory,
};

fn providers(settings: &Settings) -> Vec<Box<dyn DynEmailProvider>> {
    ProviderKind::ALL
        .iter()
        .map(|kind| provider_factory(kind.as_str(), settings).unwrap())
        .collect()
}

fn small_limits() -> Settings {
    Settings {
        limits: ContentLimits {
            max_address_length: 30,
            max_subject_length: 10,
            max_text_length: 20,
            max_html_length: 25,
        },
        ..Settings::default()
    }
}

#[tokio::test]
async fn required_fields_are_reported_in_order() {
    for mut provider in providers(&Settings::default()) {
        let name = provider.provider_name();

        let err = provider.send().await.unwrap_err();
        assert_eq!(err, EmailError::MissingRequiredField("recipient".into()), "{name}");

        provider.set_recipient("recipient@example.com");
        let err = provider.send().await.unwrap_err();
        assert_eq!(err, EmailError::MissingRequiredField("subject".into()), "{name}");

        provider.set_subject("Hello");
        let err = provider.send().await.unwrap_err();
        assert_eq!(err, EmailError::MissingRequiredField("content".into()), "{name}");

        provider.set_text_content("Hi");
        assert!(provider.send().await.is_ok(), "{name}");
    }
}

#[test]
fn body_setters_are_mutually_exclusive() {
    for mut provider in providers(&Settings::default()) {
        provider.set_text_content("plain").set_html_content("<p>html</p>");
        assert_eq!(provider.message().text(), None);
        assert_eq!(provider.message().html(), Some("<p>html</p>"));

        provider.set_html_content("<p>html</p>").set_text_content("plain");
        assert_eq!(provider.message().text(), Some("plain"));
        assert_eq!(provider.message().html(), None);
    }
}

#[tokio::test]
async fn malformed_addresses_are_rejected() {
    for bad in ["userexample.com", "user@examplecom", "user@@example.com"] {
        for mut provider in providers(&Settings::default()) {
            provider
                .set_recipient(bad)
                .set_subject("Hello")
                .set_text_content("Hi");
            let err = provider.send().await.unwrap_err();
            assert!(matches!(err, EmailError::InvalidEmailAddress(ref m) if m.starts_with("recipient")));

            provider
                .set_recipient("recipient@example.com")
                .set_sender_address(bad);
            let err = provider.send().await.unwrap_err();
            assert!(matches!(err, EmailError::InvalidEmailAddress(ref m) if m.starts_with("sender")));
        }
    }
}

#[tokio::test]
async fn limits_allow_exact_length_and_reject_one_more() {
    let settings = small_limits();

    for mut provider in providers(&settings) {
        provider
            .set_recipient("recipient@example.com")
            .set_subject(&"s".repeat(10))
            .set_text_content(&"t".repeat(20));
        assert!(provider.send().await.is_ok());

        provider.set_text_content(&"t".repeat(21));
        assert!(matches!(provider.send().await, Err(EmailError::InvalidContent(_))));

        provider.set_html_content(&"h".repeat(25));
        assert!(provider.send().await.is_ok());
        provider.set_html_content(&"h".repeat(26));
        assert!(matches!(provider.send().await, Err(EmailError::InvalidContent(_))));

        provider.set_text_content("Hi").set_subject(&"s".repeat(11));
        assert!(matches!(provider.send().await, Err(EmailError::InvalidSubject(_))));

        // 30 chars
        let at_limit = format!("{}@example.com", "r".repeat(18));
        provider.set_subject("Hello").set_recipient(&at_limit);
        assert!(provider.send().await.is_ok());

        let over_limit = format!("{}@example.com", "r".repeat(19));
        provider.set_recipient(&over_limit);
        let err = provider.send().await.unwrap_err();
        assert!(matches!(err, EmailError::InvalidEmailAddress(ref m) if m.contains("too long")));
    }
}

#[tokio::test]
async fn sendgrid_rejects_both_bodies_mailgun_accepts() {
    let settings = Settings::default();

    let mut sendgrid = SendGridProvider::new(settings.sendgrid_config()).unwrap();
    sendgrid
        .set_recipient("recipient@example.com")
        .set_subject("Hello")
        .set_text_content("Hi");
    sendgrid.draft_mut().html_content = Some("<p>Hi</p>".into());
    let err = sendgrid.send().await.unwrap_err();
    assert!(matches!(err, EmailError::InvalidContent(_)));

    let mut mailgun = MailgunProvider::new(settings.mailgun_config()).unwrap();
    mailgun
        .set_recipient("recipient@example.com")
        .set_subject("Hello")
        .set_text_content("Hi");
    mailgun.draft_mut().html_content = Some("<p>Hi</p>".into());
    let payload = mailgun.prepare_payload();
    assert_eq!(payload.text.as_deref(), Some("Hi"));
    assert_eq!(payload.html.as_deref(), Some("<p>Hi</p>"));
    assert!(mailgun.send().await.is_ok());
}

#[test]
fn unicode_passes_validation_and_preparation() {
    let settings = Settings::default();

    let mut sendgrid = SendGridProvider::new(settings.sendgrid_config()).unwrap();
    sendgrid
        .set_recipient("user.ünicode@éxample.com")
        .set_subject("你好 from SendGrid")
        .set_text_content("Unicode characters: éàüöç");
    assert!(sendgrid.validate_input().is_ok());
    let payload = sendgrid.prepare_payload();
    assert_eq!(payload.personalizations[0].to[0].email, "user.ünicode@éxample.com");
    assert_eq!(payload.subject, "你好 from SendGrid");
    assert_eq!(payload.content[0].value, "Unicode characters: éàüöç");

    let mut mailgun = MailgunProvider::new(settings.mailgun_config()).unwrap();
    mailgun
        .set_recipient("user.ünicode@éxample.com")
        .set_subject("Привет from Mailgun")
        .set_html_content("<p>Ünïcödé</p>");
    assert!(mailgun.validate_input().is_ok());
    let payload = mailgun.prepare_payload();
    assert_eq!(payload.to, "user.ünicode@éxample.com");
    assert_eq!(payload.subject, "Привет from Mailgun");
    assert_eq!(payload.html.as_deref(), Some("<p>Ünïcödé</p>"));
}
