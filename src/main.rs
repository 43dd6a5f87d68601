//! yt-sentiment CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yt_sentiment::cli::{commands, Cli, Commands, Output};
use yt_sentiment::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings =
        Settings::load_from(cli.config_path().as_ref())?.with_api_key(cli.api_key.clone());

    // Initialize logging. stdout carries the MCP stream, so logs go to stderr.
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("yt_sentiment={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Commands return their errors; they are reported once, here.
    if let Err(e) = run(&cli, settings).await {
        Output::error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &Cli, settings: Settings) -> Result<()> {
    match &cli.command {
        Commands::Mcp => {
            commands::run_mcp(settings).await?;
        }

        Commands::VideoId { url } => {
            commands::run_video_id(url)?;
        }

        Commands::Comments { video_id, json } => {
            commands::run_comments(video_id, *json, settings).await?;
        }

        Commands::Analyze { url, json } => {
            commands::run_analyze(url, *json, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, cli.config_path(), settings)?;
        }
    }

    Ok(())
}
