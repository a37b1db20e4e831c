//! Materialized checklist runs as returned by the run listing.

use std::fmt;

use jiff::{
    civil::Date,
    tz::TimeZone,
    Timestamp,
};
use serde::{Deserialize, Serialize};

/// Backend-owned run status, kept as the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RunStatus(pub String);

impl RunStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_completed(&self) -> bool {
        self.0.trim().eq_ignore_ascii_case("completed")
    }

    pub fn is_pending(&self) -> bool {
        self.0.trim().eq_ignore_ascii_case("pending")
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One occurrence of a recurring checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistRun {
    /// Opaque identifier assigned by the backend
    pub run_id: serde_json::Value,

    /// Scheduled instant; the wire form is RFC 3339 with an offset
    pub scheduled_for: Timestamp,

    #[serde(default)]
    pub status: RunStatus,
}

/// Submission timing configured on a checklist.
///
/// Both values are interval strings (`"1 00:00:00"` or `"12:00:00"`); absent
/// or malformed values mean no extra time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistCronSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_time_to_submit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_time: Option<String>,
}

/// The date range a month listing covers, `start` inclusive and
/// `end_exclusive` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerWindow {
    pub start: Date,
    pub end_exclusive: Date,
}

impl ServerWindow {
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end_exclusive
    }
}

/// Finds the run whose scheduled instant falls on `date` in `tz`.
///
/// Runs are checked in listing order and the first match wins.
pub fn find_run_for_date<'a>(
    runs: &'a [ChecklistRun],
    date: Date,
    tz: &TimeZone,
) -> Option<&'a ChecklistRun> {
    runs.iter()
        .find(|run| run.scheduled_for.to_zoned(tz.clone()).date() == date)
}
