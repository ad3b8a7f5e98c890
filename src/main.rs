//! Main entry point for the ya-translate CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ya_translate::cli::commands::{self, Commands, ConfigOverrides};
use ya_translate::TranslationClient;

/// ya-translate - batch translation through the Yandex Cloud Translate API
#[derive(Parser, Debug)]
#[command(name = "ya-translate", version, about, long_about = None)]
struct Args {
    /// Bearer token (optional, defaults to YC_API_TOKEN env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Folder identifier (optional, defaults to YC_FOLDER_ID env var)
    #[arg(long)]
    folder_id: Option<String>,

    /// Service endpoint (optional, defaults to TRANSLATE_ENDPOINT env var)
    #[arg(long)]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging; stdout is reserved for results
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={}", env!("CARGO_CRATE_NAME"), default_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let overrides = ConfigOverrides {
        api_key: args.api_key,
        folder_id: args.folder_id,
        endpoint: args.endpoint,
    };
    let config = commands::resolve_config(&overrides)?;

    let mut stdout = std::io::stdout().lock();
    match args.command {
        Commands::Translate { to, json, texts } => {
            let client = TranslationClient::new(config)?;
            commands::handle_translate(&client, &to, texts, json, &mut stdout).await?;
        }
        Commands::ShowConfig => {
            commands::handle_show_config(&config, &mut stdout)?;
        }
    }

    Ok(())
}
