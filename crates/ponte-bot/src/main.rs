//! Ponte entry point.
//!
//! Binary name: `ponte`
//!
//! Parses CLI arguments, initializes tracing, loads and validates the
//! configuration (any config problem is fatal here), then wires the
//! Anthropic provider, the completion gateway, and the Telegram transport
//! together and runs the dispatch loop until the process is killed.

mod dispatch;

use std::path::PathBuf;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use ponte_core::auth::AllowList;
use ponte_core::gateway::{ChatGateway, GatewaySettings};
use ponte_core::i18n::Texts;
use ponte_infra::config::load_config;
use ponte_infra::llm::AnthropicProvider;
use ponte_infra::telegram::TelegramClient;

use dispatch::Dispatcher;

#[derive(Parser)]
#[command(name = "ponte", version, about = "Telegram relay bot for Claude")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,ponte=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    tracing::info!(config = %cli.config.display(), "loading configuration");
    let config = load_config(&cli.config).await?;

    let texts = Texts::resolve(&config.bot.language);
    let allow_list = AllowList::new(config.telegram.authorized_users.iter().copied());

    let provider = AnthropicProvider::new(SecretString::from(config.provider.api_key.clone()));
    let gateway = ChatGateway::new(provider, GatewaySettings::from_config(&config));
    let telegram = TelegramClient::new(SecretString::from(config.telegram.token.clone()));

    tracing::info!(model = %config.provider.model, "starting ponte");

    let mut dispatcher = Dispatcher::new(telegram, gateway, texts, allow_list);
    dispatcher.run().await;

    Ok(())
}
