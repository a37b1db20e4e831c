//! Display wrapper for the run on a selected calendar date.

use std::fmt;

use jiff::civil::Date;

use super::window::WindowReport;
use crate::models::{ChecklistRun, ServerWindow};

/// Whether the run on a date can take answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAvailability {
    /// Nothing is scheduled on the date
    NoRun,
    /// The run is already completed
    Completed,
    /// Inside both the listing and the run's submission window
    Open,
    /// Outside the listing or the run's submission window
    Outside,
}

impl fmt::Display for RunAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunAvailability::NoRun => "No run scheduled for this date",
            RunAvailability::Completed => "Already completed",
            RunAvailability::Open => "Within allowed time",
            RunAvailability::Outside => "Outside allowed time",
        })
    }
}

/// The run found for a date, checked against the listing range and its own
/// submission window.
#[derive(Debug)]
pub struct RunDateReport {
    pub date: Date,
    pub listing: ServerWindow,
    pub run: Option<ChecklistRun>,
    /// Present exactly when `run` is
    pub window: Option<WindowReport>,
}

impl RunDateReport {
    pub fn in_listing(&self) -> bool {
        self.listing.contains(self.date)
    }

    pub fn availability(&self) -> RunAvailability {
        match (&self.run, &self.window) {
            (Some(run), _) if run.status.is_completed() => RunAvailability::Completed,
            (Some(_), Some(window)) if self.in_listing() && window.is_within() => {
                RunAvailability::Open
            }
            (Some(_), _) => RunAvailability::Outside,
            (None, _) => RunAvailability::NoRun,
        }
    }

    /// True when answers for the date can be saved or submitted.
    pub fn is_submittable(&self) -> bool {
        self.availability() == RunAvailability::Open
    }
}

impl fmt::Display for RunDateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Run on {}", self.date)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Listing: {} to {} (exclusive)",
            self.listing.start, self.listing.end_exclusive
        )?;
        let in_listing = if self.in_listing() { "yes" } else { "no" };
        writeln!(f, "- In listing: {in_listing}")?;
        match &self.run {
            Some(run) => writeln!(f, "- Run: `{}` ({})", run.run_id, run.status)?,
            None => writeln!(f, "- Run: none")?,
        }
        writeln!(f)?;
        if let Some(window) = &self.window {
            writeln!(f, "{window}")?;
        }
        writeln!(f, "**{}**", self.availability())
    }
}
