//! Conversion between schedule rules and the chip picker's string shape.
//!
//! The schedule form keeps its selections as lists of chip labels: month
//! names (`"JAN"`), weekday names (`"MON"`) and decimal strings for
//! everything else. A rule converted to chips and back is unchanged.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    calendar::{month_from_label, month_label, weekday_from_label, weekday_label},
    schedule::{normalize, ScheduleField, ScheduleRule, Scope, Selection},
};
use crate::cron::coerce_selection;

/// Chip selections as the form holds them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ScheduleChips {
    /// Month labels, `JAN` to `DEC`
    #[serde(default)]
    pub months: Vec<String>,
    /// Days of month, `"1"` to `"31"`
    #[serde(default)]
    pub days: Vec<String>,
    /// Weekday labels, `MON` to `SUN`
    #[serde(default)]
    pub weeks: Vec<String>,
    #[serde(default)]
    pub hours: Vec<String>,
    #[serde(default)]
    pub minutes: Vec<String>,
    #[serde(default)]
    pub seconds: Vec<String>,
}

impl ScheduleRule {
    /// Builds a rule from chip labels.
    ///
    /// Unknown labels and numeric chips that are not numbers or fall outside
    /// the field's range are dropped; duplicates collapse.
    pub fn from_chips(scope: Scope, chips: &ScheduleChips) -> Self {
        Self {
            scope,
            months: labelled(&chips.months, month_from_label),
            days_of_month: numeric(ScheduleField::DaysOfMonth, &chips.days),
            weekdays: labelled(&chips.weeks, weekday_from_label),
            hours: numeric(ScheduleField::Hours, &chips.hours),
            minutes: numeric(ScheduleField::Minutes, &chips.minutes),
            seconds: numeric(ScheduleField::Seconds, &chips.seconds),
        }
    }

    /// Converts the rule to chip labels in ascending order. Unset fields
    /// become empty lists.
    pub fn to_chips(&self) -> ScheduleChips {
        ScheduleChips {
            months: labels(&self.months, month_label),
            days: numbers(&self.days_of_month),
            weeks: labels(&self.weekdays, weekday_label),
            hours: numbers(&self.hours),
            minutes: numbers(&self.minutes),
            seconds: numbers(&self.seconds),
        }
    }
}

fn labelled(chips: &[String], lookup: fn(&str) -> Option<u8>) -> Selection {
    let values: Vec<u8> = chips.iter().filter_map(|chip| lookup(chip)).collect();
    (!values.is_empty()).then(|| values.into_iter().collect())
}

fn numeric(field: ScheduleField, chips: &[String]) -> Selection {
    normalize(field, coerce_selection(chips).into_iter().map(i64::from))
}

fn labels(selection: &Selection, lookup: fn(u8) -> Option<&'static str>) -> Vec<String> {
    selection
        .iter()
        .flatten()
        .filter_map(|value| lookup(*value))
        .map(str::to_string)
        .collect()
}

fn numbers(selection: &Selection) -> Vec<String> {
    selection
        .iter()
        .flatten()
        .map(|value| value.to_string())
        .collect()
}
