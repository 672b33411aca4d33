use clap::{ArgGroup, Args};
use mailbridge::{Settings, provider_factory};
use tracing::info;

use crate::OutputFormat;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("body").required(true).args(["text", "html"])))]
pub struct SendArgs {
    /// Provider name (`sendgrid` or `mailgun`, any case).
    #[arg(long, short, env = "MAILBRIDGE_PROVIDER", default_value = "sendgrid")]
    pub provider: String,
    /// Recipient address.
    #[arg(long)]
    pub to: String,
    /// Subject line.
    #[arg(long)]
    pub subject: String,
    /// Plain-text body.
    #[arg(long)]
    pub text: Option<String>,
    /// HTML body.
    #[arg(long)]
    pub html: Option<String>,
    /// Sender address (defaults to `DEFAULT_SENDER_EMAIL`).
    #[arg(long)]
    pub from: Option<String>,
    /// Use the simulated responder even when real keys are configured.
    #[arg(long)]
    pub simulate: bool,
}

pub async fn run(settings: &Settings, args: &SendArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mut settings = settings.clone();
    if args.simulate {
        settings.simulate_sendgrid = true;
        settings.simulate_mailgun = true;
    }

    let mut provider = provider_factory(&args.provider, &settings)?;
    provider.set_recipient(&args.to).set_subject(&args.subject);
    if let Some(ref from) = args.from {
        provider.set_sender_address(from);
    }
    if let Some(ref text) = args.text {
        provider.set_text_content(text);
    } else if let Some(ref html) = args.html {
        provider.set_html_content(html);
    }

    info!(provider = provider.provider_name(), "sending message");
    let receipt = provider.send().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        OutputFormat::Text => {
            println!(
                "Sent via {} (message id: {})",
                receipt.provider, receipt.message_id
            );
        }
    }
    Ok(())
}
