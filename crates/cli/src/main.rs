//! mailbridge CLI
//!
//! Send a message through any supported provider from the command line.

mod commands;

use clap::{Parser, Subcommand};
use mailbridge::Settings;
use tracing_subscriber::{EnvFilter, fmt};

/// mailbridge CLI: send email through SendGrid or Mailgun.
///
/// Provider credentials and limits are read from the environment
/// (`SENDGRID_API_KEY`, `MAILGUN_API_KEY`, `MAILGUN_DOMAIN`, ...).
#[derive(Parser, Debug)]
#[command(name = "mailbridge", version, about)]
struct Cli {
    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one message.
    Send(commands::send::SendArgs),
    /// List supported providers.
    Providers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Send(args) => {
            let settings = Settings::from_env()?;
            commands::send::run(&settings, &args, &cli.format).await
        }
        Command::Providers => commands::providers::run(&cli.format),
    }
}
