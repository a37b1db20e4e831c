//! Display wrapper for a submission window evaluated at a given instant.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use super::datetime::LocalDateTime;
use crate::window::{SubmissionWindow, WindowStatus};

/// A [`SubmissionWindow`] together with the instant it was checked against.
///
/// # Examples
///
/// ```rust
/// use jiff::{tz::TimeZone, Timestamp};
/// use upkeep_core::{display::WindowReport, SubmissionWindow};
///
/// let scheduled: Timestamp = "2024-03-01T09:00:00Z".parse().unwrap();
/// let window = SubmissionWindow::evaluate(scheduled, Some("1 00:00:00"), Some("12:00:00"));
/// let now: Timestamp = "2024-03-02T20:00:00Z".parse().unwrap();
///
/// let report = WindowReport::new(window, now).in_zone(TimeZone::UTC);
/// let output = report.to_string();
/// assert!(output.contains("Grace: 2024-03-02 21:00:00 UTC"));
/// assert!(output.contains("Within allowed window"));
/// ```
#[derive(Debug)]
pub struct WindowReport {
    pub window: SubmissionWindow,
    pub now: Timestamp,
    zone: TimeZone,
}

impl WindowReport {
    /// Creates a report formatted in the system time zone.
    pub fn new(window: SubmissionWindow, now: Timestamp) -> Self {
        Self {
            window,
            now,
            zone: TimeZone::system(),
        }
    }

    pub fn in_zone(mut self, zone: TimeZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn status(&self) -> WindowStatus {
        self.window.status_at(self.now)
    }

    pub fn is_within(&self) -> bool {
        self.window.is_within(self.now)
    }

    fn time(&self, timestamp: &Timestamp) -> String {
        LocalDateTime::in_zone(timestamp, self.zone.clone()).to_string()
    }
}

impl fmt::Display for WindowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Submission window")?;
        writeln!(f)?;
        writeln!(f, "- Scheduled: {}", self.time(&self.window.scheduled))?;
        match &self.window.due {
            Some(due) => writeln!(f, "- Due: {}", self.time(due))?,
            None => writeln!(f, "- Due: none")?,
        }
        writeln!(f, "- Grace: {}", self.time(&self.window.grace))?;
        writeln!(f, "- Checked at: {}", self.time(&self.now))?;
        writeln!(f, "- Status: {}", self.status())?;
        writeln!(f)?;
        if self.is_within() {
            writeln!(f, "**Within allowed window**")
        } else {
            writeln!(f, "**Outside allowed window**")
        }
    }
}
