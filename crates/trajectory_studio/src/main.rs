// Release builds open only the window on Windows, no console.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use clap::Parser;
use trajectory_studio::cli::{Cli, Commands};
use trajectory_studio::config::StudioConfig;
use trajectory_studio::{cli_mode, gui, telemetry};

fn main() -> Result<()> {
    let _log_flush = telemetry::init("logs");
    telemetry::log_panics();

    let cli = Cli::parse();
    let config = StudioConfig::resolve(&cli)?;
    tracing::info!("Backend: {}", config.backend_url);

    match cli.command {
        Some(Commands::Gui) | None => gui::run(config)?,
        Some(Commands::Summary) => cli_mode::run_summary(&config)?,
        Some(Commands::Colors(args)) => cli_mode::run_colors(&args)?,
    }

    Ok(())
}
