//! Display formatting for schedules, windows and operation results.
//!
//! Domain types implement [`std::fmt::Display`] directly where there is one
//! obvious rendering (a [`ScheduleRule`](crate::models::ScheduleRule) as its
//! chip summaries). Wrapper types cover output that needs extra context, such
//! as the instant a window was checked against.
//!
//! All formatters produce markdown so the CLI can render it richly or print
//! it as plain text.
//!
//! - [`datetime`]: timestamp formatting in a chosen time zone
//! - [`schedule`]: chip summaries for schedule rules
//! - [`window`]: submission window reports
//! - [`run`]: the run on a selected date, checked against both windows
//! - [`results`]: duration and payload results

pub mod datetime;
pub mod results;
pub mod run;
pub mod schedule;
pub mod window;

pub use datetime::LocalDateTime;
pub use results::{CronRuleResult, DurationReport};
pub use run::{RunAvailability, RunDateReport};
pub use schedule::summarize;
pub use window::WindowReport;
