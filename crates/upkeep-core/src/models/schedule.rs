//! Recurring schedule selection.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use log::warn;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UpkeepError};

/// Repetition granularity of a schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    #[serde(alias = "year")]
    Year,
    #[serde(alias = "month")]
    Month,
    #[serde(alias = "week")]
    Week,
    #[default]
    #[serde(alias = "day")]
    Day,
    #[serde(alias = "hour")]
    Hour,
}

impl Scope {
    /// Wire representation used in cron rule payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Year => "YEAR",
            Scope::Month => "MONTH",
            Scope::Week => "WEEK",
            Scope::Day => "DAY",
            Scope::Hour => "HOUR",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the multi-select fields of a [`ScheduleRule`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ScheduleField {
    Months,
    DaysOfMonth,
    Weekdays,
    Hours,
    Minutes,
    Seconds,
}

impl ScheduleField {
    pub const ALL: [ScheduleField; 6] = [
        ScheduleField::Months,
        ScheduleField::DaysOfMonth,
        ScheduleField::Weekdays,
        ScheduleField::Hours,
        ScheduleField::Minutes,
        ScheduleField::Seconds,
    ];

    /// Valid values for the field. Weekdays use the Monday-first encoding.
    pub fn range(&self) -> RangeInclusive<u8> {
        match self {
            ScheduleField::Months => 1..=12,
            ScheduleField::DaysOfMonth => 1..=31,
            ScheduleField::Weekdays => 0..=6,
            ScheduleField::Hours => 0..=23,
            ScheduleField::Minutes | ScheduleField::Seconds => 0..=59,
        }
    }

    /// The fixed option list the chip picker offers for this field.
    pub fn options(&self) -> Vec<u8> {
        self.range().collect()
    }

    pub fn contains(&self, value: i64) -> bool {
        u8::try_from(value).is_ok_and(|v| self.range().contains(&v))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleField::Months => "months",
            ScheduleField::DaysOfMonth => "days_of_month",
            ScheduleField::Weekdays => "weekdays",
            ScheduleField::Hours => "hours",
            ScheduleField::Minutes => "minutes",
            ScheduleField::Seconds => "seconds",
        }
    }

    /// Heading used in chip summaries.
    pub fn title(&self) -> &'static str {
        match self {
            ScheduleField::Months => "Months",
            ScheduleField::DaysOfMonth => "Dates",
            ScheduleField::Weekdays => "Weekdays",
            ScheduleField::Hours => "Hours",
            ScheduleField::Minutes => "Minutes",
            ScheduleField::Seconds => "Seconds",
        }
    }
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected values of one field. `None` means "any".
pub type Selection = Option<BTreeSet<u8>>;

/// A recurring time selection.
///
/// Every field holds either `None` ("any") or a non-empty ascending set of
/// in-range values. Rules are values: [`toggle`](Self::toggle) and
/// [`with_scope`](Self::with_scope) return a new rule and leave the receiver
/// untouched, so callers can compare the previous and next state directly.
///
/// ```rust
/// use upkeep_core::models::{ScheduleField, ScheduleRule};
///
/// let empty = ScheduleRule::default();
/// let nine = empty.toggle(ScheduleField::Hours, 9);
/// assert_eq!(nine.hours.as_ref().map(|h| h.len()), Some(1));
/// assert_eq!(nine.toggle(ScheduleField::Hours, 9), empty);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(from = "RawScheduleRule")]
pub struct ScheduleRule {
    pub scope: Scope,
    pub months: Selection,
    pub days_of_month: Selection,
    /// Monday-first encoding (`MON = 0 .. SUN = 6`).
    pub weekdays: Selection,
    pub hours: Selection,
    pub minutes: Selection,
    pub seconds: Selection,
}

impl ScheduleRule {
    /// An empty rule with the given scope.
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    pub fn selection(&self, field: ScheduleField) -> Option<&BTreeSet<u8>> {
        self.slot(field).as_ref()
    }

    /// Returns true when no field has a selection.
    pub fn is_unrestricted(&self) -> bool {
        ScheduleField::ALL
            .iter()
            .all(|field| self.slot(*field).is_none())
    }

    /// Flips membership of `value` in `field`.
    ///
    /// An emptied set is stored as `None`. A value outside the field's range
    /// is never stored: the rule comes back unchanged and a warning is
    /// logged. Use [`try_toggle`](Self::try_toggle) to surface that case.
    #[must_use]
    pub fn toggle(&self, field: ScheduleField, value: u8) -> Self {
        if !field.range().contains(&value) {
            warn!("Ignoring {value} for {field}: outside {:?}", field.range());
            return self.clone();
        }

        let mut next = self.clone();
        let slot = next.slot_mut(field);
        let mut values = slot.take().unwrap_or_default();
        if !values.remove(&value) {
            values.insert(value);
        }
        *slot = (!values.is_empty()).then_some(values);
        next
    }

    /// Like [`toggle`](Self::toggle) but rejects out-of-range values.
    pub fn try_toggle(&self, field: ScheduleField, value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if field.range().contains(&v) => Ok(self.toggle(field, v)),
            _ => {
                let range = field.range();
                Err(UpkeepError::invalid_input(field.as_str()).with_reason(format!(
                    "{value} is outside {}-{}",
                    range.start(),
                    range.end()
                )))
            }
        }
    }

    /// Replaces the scope. Selections are kept so that switching scope and
    /// back restores them.
    #[must_use]
    pub fn with_scope(&self, scope: Scope) -> Self {
        Self {
            scope,
            ..self.clone()
        }
    }

    /// Replaces one field wholesale, normalizing the values.
    #[must_use]
    pub fn with_selection<I>(&self, field: ScheduleField, values: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut next = self.clone();
        *next.slot_mut(field) = normalize(field, values.into_iter().map(i64::from));
        next
    }

    fn slot(&self, field: ScheduleField) -> &Selection {
        match field {
            ScheduleField::Months => &self.months,
            ScheduleField::DaysOfMonth => &self.days_of_month,
            ScheduleField::Weekdays => &self.weekdays,
            ScheduleField::Hours => &self.hours,
            ScheduleField::Minutes => &self.minutes,
            ScheduleField::Seconds => &self.seconds,
        }
    }

    fn slot_mut(&mut self, field: ScheduleField) -> &mut Selection {
        match field {
            ScheduleField::Months => &mut self.months,
            ScheduleField::DaysOfMonth => &mut self.days_of_month,
            ScheduleField::Weekdays => &mut self.weekdays,
            ScheduleField::Hours => &mut self.hours,
            ScheduleField::Minutes => &mut self.minutes,
            ScheduleField::Seconds => &mut self.seconds,
        }
    }
}

/// Drops out-of-range values and collapses an empty result to `None`.
pub(crate) fn normalize<I>(field: ScheduleField, values: I) -> Selection
where
    I: IntoIterator<Item = i64>,
{
    let mut set = BTreeSet::new();
    for value in values {
        match u8::try_from(value) {
            Ok(v) if field.range().contains(&v) => {
                set.insert(v);
            }
            _ => warn!("Dropping {value} from {field}: outside {:?}", field.range()),
        }
    }
    (!set.is_empty()).then_some(set)
}

/// Deserialization shape; arbitrary lists are normalized on the way in.
#[derive(Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
struct RawScheduleRule {
    #[serde(default)]
    scope: Scope,
    #[serde(default)]
    months: Option<Vec<i64>>,
    #[serde(default)]
    days_of_month: Option<Vec<i64>>,
    #[serde(default)]
    weekdays: Option<Vec<i64>>,
    #[serde(default)]
    hours: Option<Vec<i64>>,
    #[serde(default)]
    minutes: Option<Vec<i64>>,
    #[serde(default)]
    seconds: Option<Vec<i64>>,
}

impl From<RawScheduleRule> for ScheduleRule {
    fn from(raw: RawScheduleRule) -> Self {
        let field = |field: ScheduleField, values: Option<Vec<i64>>| {
            values.and_then(|values| normalize(field, values))
        };
        Self {
            scope: raw.scope,
            months: field(ScheduleField::Months, raw.months),
            days_of_month: field(ScheduleField::DaysOfMonth, raw.days_of_month),
            weekdays: field(ScheduleField::Weekdays, raw.weekdays),
            hours: field(ScheduleField::Hours, raw.hours),
            minutes: field(ScheduleField::Minutes, raw.minutes),
            seconds: field(ScheduleField::Seconds, raw.seconds),
        }
    }
}
