//! certnotify - posts a Slack notification for a certificate-issuance event.

use anyhow::{Context, Result};
use certnotify::{
    cli::Cli,
    config::Config,
    core::IssuanceResult,
    notification::{SlackClient, SlackPayload},
};
use clap::Parser;
use std::{fs::File, io, path::Path};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        // Initialize a default subscriber just to report this error
        tracing_subscriber::fmt().init();
        error!("Failed to load configuration: {:#}", err);
        std::process::exit(1);
    });

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    info!(
        "Slack Webhook: {}",
        if config.slack.webhook_url.is_empty() {
            "Not configured"
        } else {
            "Configured"
        }
    );
    info!("Slack Username: {}", config.slack.username);
    info!("Slack Icon URL: {}", config.slack.icon_url);
    info!("-------------------------------------------------------");

    let result = read_result(cli.result.as_deref())?;
    let payload = SlackPayload::new(&config.slack, &result);

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if config.slack.webhook_url.is_empty() {
        warn!("No Slack webhook URL configured; the notification will not be delivered.");
    }

    info!("Sending notification for {}", result.label());
    SlackClient::new(config.slack).deliver(&payload).await;
    Ok(())
}

/// Reads the issuance result from `path`, or from stdin for `None` and `-`.
fn read_result(path: Option<&Path>) -> Result<IssuanceResult> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open result file {}", path.display()))?;
            IssuanceResult::from_json_reader(file)
        }
        _ => IssuanceResult::from_json_reader(io::stdin().lock()),
    }
}
