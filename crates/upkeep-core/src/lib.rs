//! Core library for checklist scheduling.
//!
//! This crate holds the pure logic behind recurring checklists: the schedule
//! rule a user picks in the chip editor, the `HH:MM:SS` duration strings the
//! backend stores, the cron payload sent when a checklist is saved, and the
//! window that decides whether a run can still be submitted.
//!
//! Nothing here performs I/O apart from loading [`Settings`]; every other
//! operation is a function of its inputs (and, for windows, an explicit
//! clock value).
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): implement [`std::fmt::Display`] where the
//!   rendering is obvious
//! - **Display Wrappers** ([`display`]): add context such as the instant a
//!   window was checked against
//! - **Terminal Rendering**: rich markdown output via the CLI's renderer
//!
//! # Quick Start
//!
//! ```rust
//! use upkeep_core::{CronRuleBuilder, ScheduleField, ScheduleRule, Scope, SubmissionWindow};
//!
//! let rule = ScheduleRule::new(Scope::Week)
//!     .toggle(ScheduleField::Weekdays, 0)
//!     .toggle(ScheduleField::Hours, 9);
//! let payload = CronRuleBuilder::new(&rule).timezone("UTC").build();
//! assert_eq!(payload.days_of_week, vec![1]);
//!
//! let scheduled = "2024-03-01T09:00:00Z".parse().unwrap();
//! let window = SubmissionWindow::evaluate(scheduled, Some("01:00:00"), Some("00:30:00"));
//! assert!(window.is_within("2024-03-01T10:15:00Z".parse().unwrap()));
//! ```

pub mod config;
pub mod cron;
pub mod display;
pub mod duration;
pub mod error;
pub mod models;
pub mod operations;
pub mod params;
pub mod window;

// Re-export commonly used types
pub use config::{Settings, SettingsBuilder};
pub use cron::CronRuleBuilder;
pub use display::{
    CronRuleResult, DurationReport, LocalDateTime, RunAvailability, RunDateReport, WindowReport,
};
pub use duration::DurationParts;
pub use error::{Result, UpkeepError};
pub use models::{
    ChecklistRun, CronRule, CronSettingsPayload, ScheduleChips, ScheduleField, ScheduleRule, Scope,
};
pub use params::{
    BuildCronRule, BuildCronSettings, CheckRunDate, EvaluateWindow, ParseDuration, RunEntry,
    ToggleSchedule,
};
pub use window::{SubmissionWindow, WindowStatus};
