mod cli;

use clap::Parser;
use cli::{CheckArgs, Cli, Commands, ValidateArgs};
use comfygate::config::Config;
use comfygate::job::validate_input;
use comfygate::observability::Metrics;
use comfygate::upstream::{ProbeClient, ProbeConfig, wait_until_ready};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let metrics = Metrics::new();

    let ok = match cli.command {
        Commands::Check(args) => run_check(&config, args, &metrics).await?,
        Commands::Validate(args) => run_validate(&config, args, &metrics)?,
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

/// Block until the rendering server is ready; the exit code carries
/// the terminal boolean to the invoking worker runtime.
async fn run_check(
    config: &Config,
    args: CheckArgs,
    metrics: &Metrics,
) -> Result<bool, AnyError> {
    let base_url = args
        .url
        .unwrap_or_else(|| config.upstream.base_url.clone());
    let retries = args.retries.unwrap_or(config.upstream.probe_retries);
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.upstream.probe_delay());

    let probe_config = ProbeConfig {
        request_timeout: config.upstream.request_timeout(),
        ..ProbeConfig::default()
    };
    let client = ProbeClient::new(probe_config, base_url)?;

    info!(
        url = client.base_url(),
        retries,
        delay_ms = delay.as_millis() as u64,
        "Waiting for rendering server"
    );

    let ready = wait_until_ready(&client, retries, delay).await;
    if ready {
        metrics.probe_succeeded();
    } else {
        metrics.probe_exhausted();
    }

    Ok(ready)
}

/// Validate a payload from a file or stdin. Prints the canonical JSON
/// on success; the rejection message goes to stderr.
fn run_validate(
    config: &Config,
    args: ValidateArgs,
    metrics: &Metrics,
) -> Result<bool, AnyError> {
    let text = match args.file {
        Some(path) => std::fs::read_to_string(&path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let limit = config.input.max_payload_bytes;
    if text.len() as u64 > limit.as_u64() {
        error!(size = text.len(), limit = %limit, "Payload exceeds configured size limit");
        metrics.input_rejected();
        return Ok(false);
    }

    // An empty read stands in for the queue delivering no input at
    // all; everything else goes through the JSON-string path.
    let raw = (!text.trim().is_empty()).then(|| Value::String(text));

    match validate_input(raw.as_ref()) {
        Ok(input) => {
            metrics.input_accepted();
            println!("{}", serde_json::to_string_pretty(&input)?);
            Ok(true)
        }
        Err(e) => {
            metrics.input_rejected();
            eprintln!("{e}");
            Ok(false)
        }
    }
}
