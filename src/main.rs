// src/main.rs
mod cli;
mod commands;
mod logging;
mod version;

use clap::Parser;
use cli::Args;
use commands::*;
use logging::setup_logging;
use portfolio_carousel::config::Config;
use portfolio_carousel::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Keep the guard alive so buffered log lines reach the file
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.version {
        return handle_version_command();
    }

    if args.list_config {
        return handle_list_config_command().await;
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if args.wants_contact() {
        let outcome = handle_contact_command(&args, &config).await?;
        if !outcome.is_delivered() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let panels = build_panels(&args, &config)?;

    if args.once {
        return handle_once_command(&panels, &config);
    }

    handle_interactive_mode(panels, &args, &config).await
}
