//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    duration::format_millis,
    models::{CronRule, CronSettingsPayload, ScheduleRule},
};

/// Outcome of parsing a duration string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationReport {
    pub input: Option<String>,
    pub millis: i64,
}

impl fmt::Display for DurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Duration")?;
        writeln!(f)?;
        match self.input.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(input) => writeln!(f, "- Input: `{input}`")?,
            None => writeln!(f, "- Input: none")?,
        }
        writeln!(f, "- Milliseconds: {}", self.millis)?;
        writeln!(f, "- Normalized: `{}`", format_millis(self.millis))
    }
}

/// A schedule rule alongside the cron payload built from it.
pub struct CronRuleResult {
    pub rule: ScheduleRule,
    pub payload: CronRule,
}

impl CronRuleResult {
    pub fn new(rule: ScheduleRule, payload: CronRule) -> Self {
        Self { rule, payload }
    }
}

impl fmt::Display for CronRuleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule)?;
        writeln!(f)?;
        writeln!(f, "## Cron rule")?;
        writeln!(f)?;
        if let Some(label) = &self.payload.label {
            writeln!(f, "{label}")?;
            writeln!(f)?;
        }
        writeln!(f, "```json")?;
        writeln!(f, "{}", to_json(&self.payload))?;
        writeln!(f, "```")
    }
}

impl fmt::Display for CronSettingsPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Cron settings")?;
        writeln!(f)?;
        writeln!(f, "```json")?;
        writeln!(f, "{}", to_json(self))?;
        writeln!(f, "```")
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}
