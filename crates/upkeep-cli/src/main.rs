//! Upkeep CLI Application
//!
//! Command-line interface and MCP server for recurring checklist schedules.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, UpkeepMcpServer};
use renderer::TerminalRenderer;
use upkeep_core::SettingsBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        timezone,
        display_timezone,
        no_color,
        command,
    } = Args::parse();

    let settings = SettingsBuilder::new()
        .with_config_path(config_file)
        .with_timezone(timezone)
        .with_display_timezone(display_timezone)
        .build()
        .context("Failed to load settings")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Upkeep started");

    match command {
        Duration { command } => Cli::new(settings, renderer).handle_duration_command(command),
        Window(args) => Cli::new(settings, renderer).evaluate_window(args),
        RunDate(args) => Cli::new(settings, renderer).check_run_date(args),
        Schedule { command } => Cli::new(settings, renderer).handle_schedule_command(command),
        Settings(args) => Cli::new(settings, renderer).build_cron_settings(args),
        Serve => {
            info!("Starting Upkeep MCP server");
            run_stdio_server(UpkeepMcpServer::new(settings))
                .await
                .context("MCP server failed")
        }
    }
}
