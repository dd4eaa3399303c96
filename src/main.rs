use anyhow::Context;
use chardot::adapters::outbound::{init_combined_logger, init_console_logger};
use chardot::application::MovementService;
use chardot::domains::logger::LogLevel;
use chardot::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Track an agent across a 2D grid through timed move, walk and run actions.
#[derive(Parser)]
#[command(name = "chardot", version)]
struct Args {
    /// Configuration file (.cfg/.yaml/.yml/.toml). Runs the built-in demo when omitted.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Overrides the configured log level (DEBUG, INFO, WARN, ERROR).
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Also write domain logs to this file.
    #[arg(long)]
    log_file: Option<String>,

    /// Print the final trace as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.file {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::dry_run(),
    };
    let level = args.log_level.unwrap_or_else(|| config.resolve_log_level());

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &args.file {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file passed, running the built-in demo"),
    }

    let logger = match &args.log_file {
        Some(path) => init_combined_logger(path, level),
        None => init_console_logger(level),
    };

    let service = MovementService::from_config(&config, logger)?;
    if let Err(e) = service.run_all(&config.actions).await {
        error!("Stopped: {}", e);
        return Err(e.into());
    }

    let report = service.report().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
