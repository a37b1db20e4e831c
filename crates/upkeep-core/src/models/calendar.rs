//! Label tables for months and weekdays.
//!
//! Two weekday encodings meet in this crate. Schedule rules and the chip UI
//! count from Monday (`MON = 0 .. SUN = 6`), while the backend's cron payload
//! counts from Sunday (`SUN = 0 .. SAT = 6`). Every conversion between them
//! goes through [`WEEKDAYS`], never through offset arithmetic.

/// One weekday with its label and both numeric encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayEntry {
    pub label: &'static str,
    pub monday_zero: u8,
    pub sunday_zero: u8,
}

/// Weekdays in chip display order (Monday first).
pub const WEEKDAYS: [WeekdayEntry; 7] = [
    WeekdayEntry { label: "MON", monday_zero: 0, sunday_zero: 1 },
    WeekdayEntry { label: "TUE", monday_zero: 1, sunday_zero: 2 },
    WeekdayEntry { label: "WED", monday_zero: 2, sunday_zero: 3 },
    WeekdayEntry { label: "THU", monday_zero: 3, sunday_zero: 4 },
    WeekdayEntry { label: "FRI", monday_zero: 4, sunday_zero: 5 },
    WeekdayEntry { label: "SAT", monday_zero: 5, sunday_zero: 6 },
    WeekdayEntry { label: "SUN", monday_zero: 6, sunday_zero: 0 },
];

/// Month chip labels; index 0 is month 1.
pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Maps a Monday-first weekday to the Sunday-first wire encoding.
pub fn to_sunday_zero(monday_zero: u8) -> Option<u8> {
    WEEKDAYS
        .iter()
        .find(|entry| entry.monday_zero == monday_zero)
        .map(|entry| entry.sunday_zero)
}

/// Maps a Sunday-first wire weekday back to the Monday-first encoding.
pub fn to_monday_zero(sunday_zero: u8) -> Option<u8> {
    WEEKDAYS
        .iter()
        .find(|entry| entry.sunday_zero == sunday_zero)
        .map(|entry| entry.monday_zero)
}

pub fn weekday_label(monday_zero: u8) -> Option<&'static str> {
    WEEKDAYS
        .iter()
        .find(|entry| entry.monday_zero == monday_zero)
        .map(|entry| entry.label)
}

/// Case-insensitive lookup of a weekday chip label (`"mon"`, `"MON"`).
pub fn weekday_from_label(label: &str) -> Option<u8> {
    let label = label.trim();
    WEEKDAYS
        .iter()
        .find(|entry| entry.label.eq_ignore_ascii_case(label))
        .map(|entry| entry.monday_zero)
}

pub fn month_label(month: u8) -> Option<&'static str> {
    let index = usize::from(month).checked_sub(1)?;
    MONTH_LABELS.get(index).copied()
}

/// Case-insensitive lookup of a month chip label, returning 1-12.
pub fn month_from_label(label: &str) -> Option<u8> {
    let label = label.trim();
    MONTH_LABELS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(label))
        .and_then(|index| u8::try_from(index + 1).ok())
}
