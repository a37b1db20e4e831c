use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CronSettingsArgs, DurationCommands, RunDateArgs, ScheduleCommands, WindowArgs};

/// Schedule helper for recurring checklists
///
/// Upkeep builds the cron rule and cron settings payloads a checklist backend
/// expects, converts between the duration formats it uses, and checks whether
/// a scheduled run can still be submitted. It can also run as an MCP (Model
/// Context Protocol) server so assistants can use the same operations.
#[derive(Parser)]
#[command(version, about, name = "upkeep")]
pub struct Args {
    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/upkeep/config.json when present
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// IANA time zone stamped on cron rules (overrides the config file)
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    /// IANA time zone used when printing times (overrides the config file)
    #[arg(long, global = true)]
    pub display_timezone: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Upkeep CLI
///
/// - `duration`: convert between form fields, `HH:MM:SS` and milliseconds
/// - `window`: check a run's submission window
/// - `run-date`: check the listed run on a calendar date
/// - `schedule`: edit chip selections and build cron rules
/// - `settings`: build the cron settings payload
/// - `serve`: start the MCP server
#[derive(Subcommand)]
pub enum Commands {
    /// Encode or parse submission durations
    #[command(alias = "d")]
    Duration {
        #[command(subcommand)]
        command: DurationCommands,
    },
    /// Check whether a scheduled run can be submitted
    #[command(alias = "w")]
    Window(WindowArgs),
    /// Check whether the run listed on a date can be submitted
    #[command(alias = "r")]
    RunDate(RunDateArgs),
    /// Inspect, toggle and build schedule rules
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Build the cron settings payload
    Settings(CronSettingsArgs),
    /// Start the MCP server
    Serve,
}
