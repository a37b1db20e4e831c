//! Cron rule payload assembly.
//!
//! A [`ScheduleRule`] becomes a [`CronRule`] exactly once, when the
//! checklist or association form is submitted. The projection:
//!
//! - remaps weekdays from Monday-first to the backend's Sunday-first
//!   encoding through [`calendar::WEEKDAYS`](crate::models::calendar::WEEKDAYS)
//! - sends all seven days when no weekday is selected
//! - sends unset hours and minutes as empty lists, which the backend reads
//!   as "every hour" and "every minute"
//! - stamps the timezone and the enabled flag
//!
//! ```rust
//! use upkeep_core::{cron::CronRuleBuilder, models::{ScheduleField, ScheduleRule}};
//!
//! let rule = ScheduleRule::default().toggle(ScheduleField::Weekdays, 0);
//! let payload = CronRuleBuilder::new(&rule).build();
//! assert_eq!(payload.days_of_week, vec![1]);
//! assert_eq!(payload.timezone, "Asia/Kolkata");
//! ```

use crate::{
    duration::parse_leading_int,
    models::{
        calendar::{month_label, to_sunday_zero, weekday_label},
        CronRule, ScheduleRule, Scope, Selection, DEFAULT_TIMEZONE,
    },
};

/// Every weekday in the Sunday-first encoding.
pub const ALL_DAYS_OF_WEEK: [u8; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Builder for [`CronRule`] payloads.
#[derive(Debug, Clone)]
pub struct CronRuleBuilder<'a> {
    rule: &'a ScheduleRule,
    timezone: String,
    enabled: bool,
    label: bool,
}

impl<'a> CronRuleBuilder<'a> {
    /// Starts from the default timezone with the rule enabled and no label.
    pub fn new(rule: &'a ScheduleRule) -> Self {
        Self {
            rule,
            timezone: DEFAULT_TIMEZONE.to_string(),
            enabled: true,
            label: false,
        }
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Includes the human-readable label from [`build_label`].
    pub fn with_label(mut self, label: bool) -> Self {
        self.label = label;
        self
    }

    pub fn build(self) -> CronRule {
        CronRule {
            scope: self.rule.scope,
            days_of_week: days_of_week(&self.rule.weekdays),
            hours: listed(&self.rule.hours),
            minutes: listed(&self.rule.minutes),
            timezone: self.timezone,
            label: self.label.then(|| build_label(self.rule)),
            enabled: self.enabled,
        }
    }
}

impl ScheduleRule {
    /// Projects the rule into the backend's cron payload.
    pub fn to_despatch_payload(&self, timezone: impl Into<String>, enabled: bool) -> CronRule {
        CronRuleBuilder::new(self)
            .timezone(timezone)
            .enabled(enabled)
            .build()
    }
}

/// Converts string chips to numbers, dropping anything that is not a
/// non-negative integer below 256. Order and duplicates are kept.
pub fn coerce_selection<S: AsRef<str>>(values: &[S]) -> Vec<u8> {
    values
        .iter()
        .filter_map(|value| parse_leading_int(value.as_ref()))
        .filter_map(|value| u8::try_from(value).ok())
        .collect()
}

/// Human-readable description of a rule, as shown next to the schedule.
///
/// Unset hours or minutes read as `0`.
pub fn build_label(rule: &ScheduleRule) -> String {
    let number = |v: u8| Some(v.to_string());
    let hh = joined(&rule.hours, number).unwrap_or_else(|| "0".to_string());
    let mm = joined(&rule.minutes, number).unwrap_or_else(|| "0".to_string());
    let weeks =
        joined(&rule.weekdays, |v| weekday_label(v).map(str::to_string)).unwrap_or_default();
    let days = joined(&rule.days_of_month, number).unwrap_or_default();
    let months = joined(&rule.months, |v| month_label(v).map(str::to_string)).unwrap_or_default();

    match rule.scope {
        Scope::Day => format!("Every day at {hh}:{mm}"),
        Scope::Week => format!("Weekly on {weeks} at {hh}:{mm}"),
        Scope::Month => format!("Monthly on {days} at {hh}:{mm}"),
        Scope::Year => format!("Yearly {months} {days} at {hh}:{mm}"),
        Scope::Hour => format!("Every hour at :{mm}"),
    }
}

fn days_of_week(weekdays: &Selection) -> Vec<u8> {
    match weekdays {
        None => ALL_DAYS_OF_WEEK.to_vec(),
        Some(days) => {
            let mut mapped: Vec<u8> = days.iter().filter_map(|d| to_sunday_zero(*d)).collect();
            mapped.sort_unstable();
            mapped
        }
    }
}

fn listed(selection: &Selection) -> Vec<u8> {
    selection.iter().flatten().copied().collect()
}

fn joined(selection: &Selection, render: impl Fn(u8) -> Option<String>) -> Option<String> {
    let parts: Vec<String> = selection.iter().flatten().filter_map(|v| render(*v)).collect();
    (!parts.is_empty()).then(|| parts.join(","))
}
