//! Command-line argument wrappers and their handlers
//!
//! Each command has a clap-derived argument struct and a `From` conversion
//! into the matching core parameter type, so the core stays free of clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → operations
//! ```
//!
//! [`Cli`] runs the converted parameters through
//! [`upkeep_core::operations`] and renders the markdown result.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::Timestamp;
use log::debug;
use upkeep_core::{
    cron::build_label,
    operations,
    params::{
        BuildCronRule, BuildCronSettings, CheckRunDate, EvaluateWindow, ParseDuration, RunEntry,
        ToggleSchedule,
    },
    DurationParts, ScheduleChips, ScheduleField, ScheduleRule, Scope, Settings,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Duration commands
// ============================================================================

#[derive(Subcommand)]
pub enum DurationCommands {
    /// Encode days, hours and minutes as HH:MM:SS
    #[command(alias = "e")]
    Encode(EncodeArgs),
    /// Parse HH:MM:SS or "D HH:MM:SS" into milliseconds
    #[command(alias = "p")]
    Parse(ParseArgs),
}

/// Encode a duration from form fields
///
/// Days are folded into the hour count, so `--days 1 --hours 2` encodes as
/// `26:00:00`. Negative values count as zero.
#[derive(Args)]
pub struct EncodeArgs {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub hours: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub minutes: i64,
}

impl From<EncodeArgs> for DurationParts {
    fn from(val: EncodeArgs) -> Self {
        DurationParts::new(val.days, val.hours, val.minutes)
    }
}

/// Parse a backend duration string
///
/// Malformed input is not an error; it parses as zero.
#[derive(Args)]
pub struct ParseArgs {
    #[arg(help = "Duration such as 12:00:00 or \"1 00:00:00\"")]
    pub value: Option<String>,
}

impl From<ParseArgs> for ParseDuration {
    fn from(val: ParseArgs) -> Self {
        ParseDuration { value: val.value }
    }
}

// ============================================================================
// Window command
// ============================================================================

/// Evaluate a run's submission window
#[derive(Args)]
pub struct WindowArgs {
    #[arg(long, help = "Scheduled instant, RFC 3339 with offset")]
    pub scheduled_for: String,
    #[arg(long, help = "Allowed time to submit, HH:MM:SS or \"D HH:MM:SS\"")]
    pub allowed: Option<String>,
    #[arg(long, help = "Extension after the due time, HH:MM:SS or \"D HH:MM:SS\"")]
    pub extension: Option<String>,
    #[arg(long, help = "Instant to check instead of the current time")]
    pub now: Option<String>,
}

impl From<WindowArgs> for EvaluateWindow {
    fn from(val: WindowArgs) -> Self {
        EvaluateWindow {
            scheduled_for: val.scheduled_for,
            allowed_time_to_submit: val.allowed,
            extension_time: val.extension,
            now: val.now,
        }
    }
}

// ============================================================================
// Run date command
// ============================================================================

/// Check the run listed on a calendar date
///
/// The runs file holds the JSON array returned by the month listing, each
/// entry with `run_id`, `scheduled_for` and `status`. Answers can be saved
/// only when the date is inside the listing range and the run is inside its
/// submission window.
#[derive(Args)]
pub struct RunDateArgs {
    #[arg(long, help = "JSON file with the listed runs")]
    pub runs: PathBuf,
    #[arg(long, help = "Selected date, YYYY-MM-DD")]
    pub date: String,
    #[arg(long, help = "First date of the listing, YYYY-MM-DD")]
    pub listing_start: String,
    #[arg(long, help = "Day after the last date of the listing, YYYY-MM-DD")]
    pub listing_end: String,
    #[arg(long, help = "Allowed time to submit, HH:MM:SS or \"D HH:MM:SS\"")]
    pub allowed: Option<String>,
    #[arg(long, help = "Extension after the due time, HH:MM:SS or \"D HH:MM:SS\"")]
    pub extension: Option<String>,
    #[arg(long, help = "Instant to check instead of the current time")]
    pub now: Option<String>,
}

impl TryFrom<RunDateArgs> for CheckRunDate {
    type Error = anyhow::Error;

    fn try_from(val: RunDateArgs) -> Result<Self> {
        let text = fs::read_to_string(&val.runs)
            .with_context(|| format!("Failed to read runs file {}", val.runs.display()))?;
        let runs: Vec<RunEntry> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse runs file {}", val.runs.display()))?;

        Ok(CheckRunDate {
            runs,
            date: val.date,
            listing_start: val.listing_start,
            listing_end_exclusive: val.listing_end,
            allowed_time_to_submit: val.allowed,
            extension_time: val.extension,
            now: val.now,
        })
    }
}

// ============================================================================
// Schedule commands
// ============================================================================

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Summarize a chip selection
    Show(ChipArgs),
    /// Toggle one value in a chip selection
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Build the cron rule payload for a chip selection
    #[command(alias = "b")]
    Build(BuildArgs),
}

/// Chip selection given as comma-separated flags
#[derive(Args)]
pub struct ChipArgs {
    #[arg(long, value_enum, default_value_t = ScopeArg::Day)]
    pub scope: ScopeArg,
    #[arg(long, value_delimiter = ',', help = "Month labels, JAN to DEC")]
    pub months: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "Days of month, 1 to 31")]
    pub days: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "Weekday labels, MON to SUN")]
    pub weeks: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "Hours, 0 to 23")]
    pub hours: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "Minutes, 0 to 59")]
    pub minutes: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "Seconds, 0 to 59")]
    pub seconds: Vec<String>,
}

impl ChipArgs {
    fn into_parts(self) -> (Scope, ScheduleChips) {
        let chips = ScheduleChips {
            months: self.months,
            days: self.days,
            weeks: self.weeks,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        };
        (self.scope.into(), chips)
    }
}

impl From<ChipArgs> for ScheduleRule {
    fn from(val: ChipArgs) -> Self {
        let (scope, chips) = val.into_parts();
        ScheduleRule::from_chips(scope, &chips)
    }
}

/// Toggle a value in one field
///
/// Weekdays count from Monday (MON = 0 .. SUN = 6). Toggling a selected
/// value removes it; removing the last value resets the field to "any".
#[derive(Args)]
pub struct ToggleArgs {
    #[command(flatten)]
    pub chips: ChipArgs,
    #[arg(long, value_enum)]
    pub field: FieldArg,
    #[arg(long, allow_negative_numbers = true)]
    pub value: i64,
}

impl From<ToggleArgs> for ToggleSchedule {
    fn from(val: ToggleArgs) -> Self {
        ToggleSchedule {
            rule: val.chips.into(),
            field: val.field.into(),
            value: val.value,
        }
    }
}

/// Build a cron rule from a chip selection
#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub chips: ChipArgs,
    #[arg(long, help = "Include a human-readable label")]
    pub label: bool,
    #[arg(long, help = "Create the rule disabled")]
    pub disabled: bool,
}

impl From<BuildArgs> for BuildCronRule {
    fn from(val: BuildArgs) -> Self {
        let (scope, chips) = val.chips.into_parts();
        BuildCronRule {
            scope,
            chips,
            timezone: None,
            enabled: val.disabled.then_some(false),
            label: val.label,
        }
    }
}

// ============================================================================
// Settings command
// ============================================================================

/// Build the cron settings payload
#[derive(Args)]
pub struct CronSettingsArgs {
    #[arg(long, default_value_t = 0)]
    pub allowed_days: i64,
    #[arg(long, default_value_t = 0)]
    pub allowed_hours: i64,
    #[arg(long, default_value_t = 0)]
    pub allowed_minutes: i64,
    #[arg(long, default_value_t = 0)]
    pub extension_days: i64,
    #[arg(long, default_value_t = 0)]
    pub extension_hours: i64,
    #[arg(long, default_value_t = 0)]
    pub extension_minutes: i64,
    #[arg(long, help = "Lock tasks once they are overdue")]
    pub lock_overdue: bool,
    #[arg(long, value_delimiter = ',', help = "Supervisor user IDs")]
    pub supervisors: Vec<u64>,
    #[arg(long)]
    pub supplier_id: Option<u64>,
    #[arg(long, value_delimiter = ',', help = "Group IDs locked when overdue")]
    pub locked_groups: Vec<u64>,
}

impl From<CronSettingsArgs> for BuildCronSettings {
    fn from(val: CronSettingsArgs) -> Self {
        BuildCronSettings {
            allowed: DurationParts::new(val.allowed_days, val.allowed_hours, val.allowed_minutes),
            extension: DurationParts::new(
                val.extension_days,
                val.extension_hours,
                val.extension_minutes,
            ),
            lock_overdue_task: val.lock_overdue,
            supervisors: val.supervisors,
            supplier_id: val.supplier_id,
            locked_group_ids: val.locked_groups,
        }
    }
}

// ============================================================================
// Value enums
// ============================================================================

/// Command-line representation of [`Scope`]
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    Year,
    Month,
    Week,
    Day,
    Hour,
}

impl From<ScopeArg> for Scope {
    fn from(val: ScopeArg) -> Self {
        match val {
            ScopeArg::Year => Scope::Year,
            ScopeArg::Month => Scope::Month,
            ScopeArg::Week => Scope::Week,
            ScopeArg::Day => Scope::Day,
            ScopeArg::Hour => Scope::Hour,
        }
    }
}

/// Command-line representation of [`ScheduleField`]
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Months,
    #[value(alias = "days")]
    DaysOfMonth,
    #[value(alias = "weeks")]
    Weekdays,
    Hours,
    Minutes,
    Seconds,
}

impl From<FieldArg> for ScheduleField {
    fn from(val: FieldArg) -> Self {
        match val {
            FieldArg::Months => ScheduleField::Months,
            FieldArg::DaysOfMonth => ScheduleField::DaysOfMonth,
            FieldArg::Weekdays => ScheduleField::Weekdays,
            FieldArg::Hours => ScheduleField::Hours,
            FieldArg::Minutes => ScheduleField::Minutes,
            FieldArg::Seconds => ScheduleField::Seconds,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against the loaded settings and renders the output.
pub struct Cli {
    settings: Settings,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(settings: Settings, renderer: TerminalRenderer) -> Self {
        Self { settings, renderer }
    }

    pub fn handle_duration_command(&self, command: DurationCommands) -> Result<()> {
        match command {
            DurationCommands::Encode(args) => {
                let encoded = operations::encode_duration(&args.into());
                self.renderer.render(&format!("{encoded}\n"))
            }
            DurationCommands::Parse(args) => {
                let report = operations::parse_duration(&args.into());
                self.renderer.render(&report.to_string())
            }
        }
    }

    pub fn evaluate_window(&self, args: WindowArgs) -> Result<()> {
        let params: EvaluateWindow = args.into();
        let report = operations::evaluate_window(&params, Timestamp::now(), &self.settings)
            .context("Failed to evaluate submission window")?;
        self.renderer.render(&report.to_string())
    }

    pub fn check_run_date(&self, args: RunDateArgs) -> Result<()> {
        let params = CheckRunDate::try_from(args)?;
        let report = operations::check_run_for_date(&params, Timestamp::now(), &self.settings)
            .context("Failed to check run for date")?;
        self.renderer.render(&report.to_string())
    }

    pub fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Show(args) => {
                let rule: ScheduleRule = args.into();
                self.render_rule(&rule)
            }
            ScheduleCommands::Toggle(args) => {
                let params: ToggleSchedule = args.into();
                debug!("Toggling {} {} on {:?}", params.field, params.value, params.rule);
                let rule = operations::toggle_schedule(&params)
                    .context("Failed to toggle schedule value")?;
                self.render_rule(&rule)
            }
            ScheduleCommands::Build(args) => {
                let result = operations::build_cron_rule(&args.into(), &self.settings);
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub fn build_cron_settings(&self, args: CronSettingsArgs) -> Result<()> {
        let payload = operations::build_cron_settings(&args.into());
        self.renderer.render(&payload.to_string())
    }

    fn render_rule(&self, rule: &ScheduleRule) -> Result<()> {
        self.renderer
            .render(&format!("{rule}\nLabel: {}\n", build_label(rule)))
    }
}
