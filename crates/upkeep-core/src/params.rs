//! Parameter structures for upkeep operations
//!
//! These structures are shared by the interfaces (CLI, MCP) and carry no
//! framework-specific derives beyond serde. JSON schema generation is
//! available behind the `schema` feature for the MCP server.
//!
//! Interface layers wrap or convert into these types:
//!
//! ```text
//! CLI Args (clap) ──┐
//!                   ├──▶ Core Params ──▶ operations
//! MCP Params (serde)┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    duration::DurationParts,
    models::{ScheduleChips, ScheduleField, ScheduleRule, Scope},
};

/// Parameters for parsing a backend duration string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ParseDuration {
    /// Duration as `HH:MM:SS` or `D HH:MM:SS`; absent means zero
    #[serde(default)]
    pub value: Option<String>,
}

/// Parameters for evaluating a run's submission window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EvaluateWindow {
    /// Scheduled instant, RFC 3339 with offset (e.g. `2024-03-01T09:00:00Z`)
    pub scheduled_for: String,
    /// Allowed time to submit (`HH:MM:SS` or `D HH:MM:SS`)
    #[serde(default)]
    pub allowed_time_to_submit: Option<String>,
    /// Extension after the due time (`HH:MM:SS` or `D HH:MM:SS`)
    #[serde(default)]
    pub extension_time: Option<String>,
    /// Instant to check, RFC 3339; the current time when absent
    #[serde(default)]
    pub now: Option<String>,
}

/// Parameters for toggling one chip of a schedule rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleSchedule {
    /// Current rule; an empty daily rule when absent
    #[serde(default)]
    pub rule: ScheduleRule,
    /// Field to toggle
    pub field: ScheduleField,
    /// Value to add or remove (weekdays count from Monday = 0)
    pub value: i64,
}

/// Parameters for building a cron rule payload from chip selections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BuildCronRule {
    /// Repetition scope
    #[serde(default)]
    pub scope: Scope,
    /// Chip selections as labels and decimal strings
    #[serde(default)]
    pub chips: ScheduleChips,
    /// Timezone override; the configured timezone when absent
    #[serde(default)]
    pub timezone: Option<String>,
    /// Enabled override; the configured default when absent
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Whether to include the human-readable label
    #[serde(default)]
    pub label: bool,
}

/// Parameters for building the `cron_settings` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BuildCronSettings {
    /// Allowed time to submit
    #[serde(default)]
    pub allowed: DurationParts,
    /// Extension time after the due time
    #[serde(default)]
    pub extension: DurationParts,
    /// Lock tasks once they are overdue
    #[serde(default)]
    pub lock_overdue_task: bool,
    #[serde(default)]
    pub supervisors: Vec<u64>,
    #[serde(default)]
    pub supplier_id: Option<u64>,
    /// Groups locked when a task is overdue
    #[serde(default)]
    pub locked_group_ids: Vec<u64>,
}

/// One run as returned by the month listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RunEntry {
    /// Backend run identifier, passed through as-is
    #[serde(default)]
    pub run_id: serde_json::Value,
    /// Scheduled instant, RFC 3339 with offset
    pub scheduled_for: String,
    /// Run status, e.g. `pending` or `completed`
    #[serde(default)]
    pub status: String,
}

/// Parameters for checking whether the run on a selected date can be
/// submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CheckRunDate {
    /// Runs from the month listing
    #[serde(default)]
    pub runs: Vec<RunEntry>,
    /// Selected calendar date, `YYYY-MM-DD`
    pub date: String,
    /// First date covered by the listing, `YYYY-MM-DD`
    pub listing_start: String,
    /// Day after the last date covered by the listing, `YYYY-MM-DD`
    pub listing_end_exclusive: String,
    /// Allowed time to submit (`HH:MM:SS` or `D HH:MM:SS`)
    #[serde(default)]
    pub allowed_time_to_submit: Option<String>,
    /// Extension after the due time (`HH:MM:SS` or `D HH:MM:SS`)
    #[serde(default)]
    pub extension_time: Option<String>,
    /// Instant to check, RFC 3339; the current time when absent
    #[serde(default)]
    pub now: Option<String>,
}
