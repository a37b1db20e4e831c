//! Common operations shared by the CLI and the MCP server.
//!
//! Each function takes core parameters, applies the boundary validation the
//! pure modules leave to their callers (timestamps, chip ranges), and
//! returns a value ready for display.

use jiff::{civil::Date, Timestamp};
use log::debug;

use crate::{
    config::Settings,
    cron::CronRuleBuilder,
    display::{CronRuleResult, DurationReport, RunDateReport, WindowReport},
    duration::{self, DurationParts},
    error::{Result, UpkeepError},
    models::{
        find_run_for_date, ChecklistRun, CronSettingsPayload, RunStatus, ScheduleRule, ServerWindow,
    },
    params::{
        BuildCronRule, BuildCronSettings, CheckRunDate, EvaluateWindow, ParseDuration, RunEntry,
        ToggleSchedule,
    },
    window::SubmissionWindow,
};

/// Parses an RFC 3339 timestamp with an offset.
///
/// # Examples
///
/// ```rust
/// # use upkeep_core::operations::parse_timestamp;
/// assert!(parse_timestamp("2024-03-01T09:00:00+05:30").is_ok());
/// assert!(parse_timestamp("yesterday").is_err());
/// ```
pub fn parse_timestamp(text: &str) -> Result<Timestamp> {
    text.trim()
        .parse()
        .map_err(|e| UpkeepError::timestamp(text, e))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, text: &str) -> Result<Date> {
    text.trim().parse().map_err(|e: jiff::Error| {
        UpkeepError::invalid_input(field).with_reason(format!("'{text}' is not a date: {e}"))
    })
}

/// Encodes a day/hour/minute triple as `HH:MM:SS`.
pub fn encode_duration(params: &DurationParts) -> String {
    params.encode()
}

/// Parses a backend duration string. Never fails.
pub fn parse_duration(params: &ParseDuration) -> DurationReport {
    DurationReport {
        input: params.value.clone(),
        millis: duration::parse_to_millis(params.value.as_deref()),
    }
}

/// Evaluates a submission window.
///
/// `clock` is used when the parameters carry no explicit `now`.
///
/// # Errors
///
/// Returns `UpkeepError::Timestamp` when `scheduled_for` or `now` is not a
/// valid timestamp. Malformed durations are not errors; they count as zero.
pub fn evaluate_window(
    params: &EvaluateWindow,
    clock: Timestamp,
    settings: &Settings,
) -> Result<WindowReport> {
    let scheduled = parse_timestamp(&params.scheduled_for)?;
    let now = match params.now.as_deref() {
        Some(text) => parse_timestamp(text)?,
        None => clock,
    };

    let window = SubmissionWindow::evaluate(
        scheduled,
        params.allowed_time_to_submit.as_deref(),
        params.extension_time.as_deref(),
    );
    debug!("Evaluated window {window:?} at {now}");

    Ok(WindowReport::new(window, now).in_zone(settings.display_zone()))
}

/// Finds the run listed on a date and checks it against both the listing
/// range and its own submission window.
///
/// Runs are matched to the date in the display time zone.
///
/// # Errors
///
/// Returns `UpkeepError::InvalidInput` for a malformed date and
/// `UpkeepError::Timestamp` for a malformed run or `now` timestamp.
pub fn check_run_for_date(
    params: &CheckRunDate,
    clock: Timestamp,
    settings: &Settings,
) -> Result<RunDateReport> {
    let date = parse_date("date", &params.date)?;
    let listing = ServerWindow {
        start: parse_date("listing_start", &params.listing_start)?,
        end_exclusive: parse_date("listing_end_exclusive", &params.listing_end_exclusive)?,
    };
    let now = match params.now.as_deref() {
        Some(text) => parse_timestamp(text)?,
        None => clock,
    };
    let runs = params
        .runs
        .iter()
        .map(to_run)
        .collect::<Result<Vec<_>>>()?;

    let zone = settings.display_zone();
    let run = find_run_for_date(&runs, date, &zone).cloned();
    let window = run.as_ref().map(|run| {
        let window = SubmissionWindow::evaluate(
            run.scheduled_for,
            params.allowed_time_to_submit.as_deref(),
            params.extension_time.as_deref(),
        );
        WindowReport::new(window, now).in_zone(zone.clone())
    });
    debug!(
        "Run for {date} among {} listed: {:?}",
        runs.len(),
        run.as_ref().map(|r| &r.run_id)
    );

    Ok(RunDateReport {
        date,
        listing,
        run,
        window,
    })
}

fn to_run(entry: &RunEntry) -> Result<ChecklistRun> {
    Ok(ChecklistRun {
        run_id: entry.run_id.clone(),
        scheduled_for: parse_timestamp(&entry.scheduled_for)?,
        status: RunStatus::new(entry.status.clone()),
    })
}

/// Toggles one chip of a rule.
///
/// # Errors
///
/// Returns `UpkeepError::InvalidInput` when the value is outside the field's
/// range.
pub fn toggle_schedule(params: &ToggleSchedule) -> Result<ScheduleRule> {
    params.rule.try_toggle(params.field, params.value)
}

/// Builds the cron rule payload for chip selections.
pub fn build_cron_rule(params: &BuildCronRule, settings: &Settings) -> CronRuleResult {
    let rule = ScheduleRule::from_chips(params.scope, &params.chips);
    let payload = CronRuleBuilder::new(&rule)
        .timezone(
            params
                .timezone
                .clone()
                .unwrap_or_else(|| settings.timezone.clone()),
        )
        .enabled(params.enabled.unwrap_or(settings.enabled))
        .with_label(params.label)
        .build();

    CronRuleResult::new(rule, payload)
}

/// Builds the `cron_settings` payload of a checklist bundle.
pub fn build_cron_settings(params: &BuildCronSettings) -> CronSettingsPayload {
    CronSettingsPayload {
        allowed_time_to_submit: params.allowed.encode(),
        extension_time: params.extension.encode(),
        lock_overdue_task: params.lock_overdue_task,
        supervisors: params.supervisors.clone(),
        supplier_id: params.supplier_id,
        locked_group_ids: params.locked_group_ids.clone(),
    }
}
