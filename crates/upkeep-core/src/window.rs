//! Submission window for a scheduled checklist run.
//!
//! A run scheduled at `S` with an allowed duration `A` and an extension `E`
//! accepts answers from `S` through `grace`:
//!
//! ```text
//!   S ────────── due = S + A ────────── grace = due + E
//!   │  on time   │        extension     │  closed
//! ```
//!
//! When `A` is zero or missing there is no due time and the window collapses
//! to the scheduled instant itself; an extension on its own does not open it.
//!
//! The current time is always passed in. Nothing here reads the clock.

use std::fmt;

use jiff::{SignedDuration, Timestamp};

use crate::{
    duration::parse_to_millis,
    models::{ChecklistCronSettings, ChecklistRun},
};

/// Where an instant falls relative to a [`SubmissionWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStatus {
    /// Before the scheduled time
    Upcoming,
    /// Between the scheduled time and the due time
    OnTime,
    /// Past due, inside the extension
    Extension,
    /// Past the grace deadline
    Closed,
}

impl WindowStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, WindowStatus::OnTime | WindowStatus::Extension)
    }
}

impl fmt::Display for WindowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindowStatus::Upcoming => "Not yet open",
            WindowStatus::OnTime => "On time",
            WindowStatus::Extension => "In extension",
            WindowStatus::Closed => "Closed",
        })
    }
}

/// Due and grace instants derived from a run's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionWindow {
    pub scheduled: Timestamp,
    /// `scheduled + allowed`; `None` when no allowed duration is configured
    pub due: Option<Timestamp>,
    /// `due + extension`, or `scheduled` when there is no due time
    pub grace: Timestamp,
}

impl SubmissionWindow {
    /// Computes the window from raw duration strings. Absent or malformed
    /// durations count as zero.
    pub fn evaluate(scheduled: Timestamp, allowed: Option<&str>, extension: Option<&str>) -> Self {
        let allowed_ms = parse_to_millis(allowed);
        let due = (allowed_ms != 0).then(|| shift(scheduled, allowed_ms));
        let grace = match due {
            Some(due) => shift(due, parse_to_millis(extension)),
            None => scheduled,
        };

        Self {
            scheduled,
            due,
            grace,
        }
    }

    /// Window for a listed run under its checklist's settings.
    pub fn for_run(run: &ChecklistRun, settings: &ChecklistCronSettings) -> Self {
        Self::evaluate(
            run.scheduled_for,
            settings.allowed_time_to_submit.as_deref(),
            settings.extension_time.as_deref(),
        )
    }

    /// True when `scheduled <= now <= grace`.
    pub fn is_within(&self, now: Timestamp) -> bool {
        self.scheduled <= now && now <= self.grace
    }

    pub fn status_at(&self, now: Timestamp) -> WindowStatus {
        if now < self.scheduled {
            WindowStatus::Upcoming
        } else if now <= self.due.unwrap_or(self.scheduled) {
            WindowStatus::OnTime
        } else if now <= self.grace {
            WindowStatus::Extension
        } else {
            WindowStatus::Closed
        }
    }
}

fn shift(instant: Timestamp, millis: i64) -> Timestamp {
    instant
        .checked_add(SignedDuration::from_millis(millis))
        .unwrap_or(if millis < 0 { Timestamp::MIN } else { Timestamp::MAX })
}
