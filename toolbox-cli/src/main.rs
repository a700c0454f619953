mod cli;
mod commands;
mod config;
mod error;
mod transfer;

use clap::Parser;
use config::Settings;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.apply_cli(&cli);

    // An explicit --log-level beats RUST_LOG, which beats the settings file.
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&settings.log_level))?,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        cli::Command::Export(args) => commands::export(args, &settings).await?,
        cli::Command::Import { file } => commands::import(&file, &settings).await?,
        cli::Command::Inspect { file } => commands::inspect(&file).await?,
        cli::Command::Check { files } => commands::check(&files).await?,
    }

    Ok(())
}
