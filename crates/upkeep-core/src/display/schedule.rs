//! Display implementation for schedule rules.
//!
//! Each field renders as a one-line chip summary: the first two selections
//! followed by a `+N` count of the rest, or `any` when nothing is selected.

use std::{collections::BTreeSet, fmt};

use crate::models::{
    calendar::{month_label, weekday_label},
    ScheduleField, ScheduleRule,
};

/// How many chips a summary lists before collapsing the rest into `+N`.
const SUMMARY_CHIPS: usize = 2;

/// One-line summary of a field, e.g. `Hours: 9, 14 +1` or `Months: any`.
pub fn summarize(field: ScheduleField, selection: Option<&BTreeSet<u8>>) -> String {
    let Some(values) = selection.filter(|v| !v.is_empty()) else {
        return format!("{}: any", field.title());
    };

    let shown: Vec<String> = values
        .iter()
        .take(SUMMARY_CHIPS)
        .map(|value| chip_text(field, *value))
        .collect();
    let more = values.len().saturating_sub(SUMMARY_CHIPS);

    if more > 0 {
        format!("{}: {} +{more}", field.title(), shown.join(", "))
    } else {
        format!("{}: {}", field.title(), shown.join(", "))
    }
}

fn chip_text(field: ScheduleField, value: u8) -> String {
    let label = match field {
        ScheduleField::Months => month_label(value),
        ScheduleField::Weekdays => weekday_label(value),
        _ => None,
    };
    label.map_or_else(|| value.to_string(), str::to_string)
}

impl fmt::Display for ScheduleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Schedule ({})", self.scope)?;
        writeln!(f)?;
        for field in ScheduleField::ALL {
            writeln!(f, "- {}", summarize(field, self.selection(field)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scope;

    #[test]
    fn test_summary_of_unset_field() {
        assert_eq!(summarize(ScheduleField::Months, None), "Months: any");
    }

    #[test]
    fn test_summary_collapses_after_two() {
        let rule = ScheduleRule::default()
            .toggle(ScheduleField::Hours, 14)
            .toggle(ScheduleField::Hours, 9)
            .toggle(ScheduleField::Hours, 18);
        assert_eq!(summarize(ScheduleField::Hours, rule.hours.as_ref()), "Hours: 9, 14 +1");
    }

    #[test]
    fn test_summary_uses_labels() {
        let rule = ScheduleRule::default()
            .toggle(ScheduleField::Weekdays, 6)
            .toggle(ScheduleField::Months, 12);
        assert_eq!(summarize(ScheduleField::Weekdays, rule.weekdays.as_ref()), "Weekdays: SUN");
        assert_eq!(summarize(ScheduleField::Months, rule.months.as_ref()), "Months: DEC");
    }

    #[test]
    fn test_rule_display() {
        let rule = ScheduleRule::new(Scope::Week)
            .toggle(ScheduleField::Weekdays, 0)
            .toggle(ScheduleField::Hours, 9);
        let output = rule.to_string();

        assert!(output.starts_with("## Schedule (WEEK)"));
        assert!(output.contains("- Weekdays: MON"));
        assert!(output.contains("- Hours: 9"));
        assert!(output.contains("- Dates: any"));
        assert!(output.contains("- Seconds: any"));
    }
}
