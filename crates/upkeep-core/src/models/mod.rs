//! Data models for schedules, runs and backend payloads.
//!
//! - [`schedule`]: [`ScheduleRule`], its [`Scope`] and the selectable
//!   [`ScheduleField`]s
//! - [`chips`]: conversion to and from the chip picker's label lists
//! - [`calendar`]: month and weekday label tables, including the
//!   Monday-first/Sunday-first weekday mapping
//! - [`run`]: materialized runs and their timing settings
//! - [`payload`]: request/response bodies of the checklist endpoints
//!
//! Display implementations live in [`crate::display`].

pub mod calendar;
pub mod chips;
pub mod payload;
pub mod run;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use chips::ScheduleChips;
pub use payload::{
    Answer, AssociationBulkCreate, ChecklistBundle, ChecklistMeta, CronRule, CronSettingsPayload,
    RunSubmission, RunSubmissionResponse, DEFAULT_TIMEZONE,
};
pub use run::{find_run_for_date, ChecklistCronSettings, ChecklistRun, RunStatus, ServerWindow};
pub use schedule::{ScheduleField, ScheduleRule, Scope, Selection};
