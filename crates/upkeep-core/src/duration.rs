//! Duration text codec for checklist cron settings.
//!
//! The backend stores "allowed time to submit" and "extension time" as
//! interval strings. Two shapes are in circulation:
//!
//! - `HH:MM:SS`, which is what this client sends. Days are folded into the
//!   hour count, so three days and two hours encode as `74:00:00`.
//! - `D HH:MM:SS`, which the backend returns when the interval is a day or
//!   longer (`"1 00:00:00"`).
//!
//! Parsing is total. Anything that does not look like a number counts as
//! zero, so a malformed duration means "no extra time" rather than an error.
//!
//! ```rust
//! use upkeep_core::duration;
//!
//! assert_eq!(duration::encode(1, 2, 30), "26:30:00");
//! assert_eq!(duration::parse_to_millis(Some("1 00:00:00")), 86_400_000);
//! assert_eq!(duration::parse_to_millis(Some("abc")), 0);
//! assert_eq!(duration::parse_to_millis(None), 0);
//! ```

use jiff::SignedDuration;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A human-entered day/hour/minute triple from the cron settings form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DurationParts {
    #[serde(default)]
    pub days: i64,
    #[serde(default)]
    pub hours: i64,
    #[serde(default)]
    pub minutes: i64,
}

impl DurationParts {
    pub fn new(days: i64, hours: i64, minutes: i64) -> Self {
        Self {
            days,
            hours,
            minutes,
        }
    }

    /// Builds the triple from raw form text, coercing each field the same
    /// way [`encode_fields`] does.
    pub fn from_fields(days: &str, hours: &str, minutes: &str) -> Self {
        Self {
            days: coerce_field(days),
            hours: coerce_field(hours),
            minutes: coerce_field(minutes),
        }
    }

    /// Formats the triple as `HH:MM:SS`.
    pub fn encode(&self) -> String {
        encode(self.days, self.hours, self.minutes)
    }
}

/// Encodes days, hours and minutes as a zero-padded `HH:MM:SS` string.
///
/// Negative inputs are treated as zero. Days are folded into the hour count
/// and seconds are always `00`. Hour counts above 99 are written in full.
pub fn encode(days: i64, hours: i64, minutes: i64) -> String {
    let total_minutes = days
        .max(0)
        .saturating_mul(24 * 60)
        .saturating_add(hours.max(0).saturating_mul(60))
        .saturating_add(minutes.max(0));

    format!("{:02}:{:02}:00", total_minutes / 60, total_minutes % 60)
}

/// Encodes raw form text. Empty or non-numeric fields count as zero.
pub fn encode_fields(days: &str, hours: &str, minutes: &str) -> String {
    DurationParts::from_fields(days, hours, minutes).encode()
}

/// Parses `HH:MM:SS` or `D HH:MM:SS` into milliseconds.
///
/// Returns 0 for `None` or blank input. Each component that is missing,
/// non-numeric or negative contributes 0. Never panics; arithmetic
/// saturates at `i64::MAX`.
pub fn parse_to_millis(text: Option<&str>) -> i64 {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return 0;
    };

    let parts: Vec<&str> = text.split_whitespace().collect();
    let (days, clock) = match parts.as_slice() {
        [days, clock] => (component(days), *clock),
        _ => (0, text),
    };

    let mut fields = clock.split(':').map(component);
    let hours = fields.next().unwrap_or(0);
    let minutes = fields.next().unwrap_or(0);
    let seconds = fields.next().unwrap_or(0);

    days.saturating_mul(24)
        .saturating_add(hours)
        .saturating_mul(60)
        .saturating_add(minutes)
        .saturating_mul(60)
        .saturating_add(seconds)
        .saturating_mul(1000)
}

/// Same as [`parse_to_millis`], as a [`SignedDuration`].
pub fn parse(text: Option<&str>) -> SignedDuration {
    SignedDuration::from_millis(parse_to_millis(text))
}

/// Renders milliseconds back into the backend's interval shape, with a day
/// prefix only when the value spans at least one day.
pub fn format_millis(millis: i64) -> String {
    let total_seconds = millis.max(0) / 1000;
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!("{days} {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Reads the integer at the start of `text`, ignoring leading whitespace
/// and anything after the digits (`"9am"` is 9). Returns `None` when no
/// digit is present.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = saturating_digits(digits);
    Some(if negative { -magnitude } else { magnitude })
}

fn saturating_digits(digits: &str) -> i64 {
    digits
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')))
}

fn coerce_field(text: &str) -> i64 {
    parse_leading_int(text).unwrap_or(0).max(0)
}

/// A clock or day component. Only unsigned digit runs count; anything else,
/// including a minus sign, is zero. Oversized values saturate.
fn component(text: &str) -> i64 {
    let text = text.trim();
    let digits = text.strip_prefix('+').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    saturating_digits(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: i64 = 60 * 1000;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    #[test]
    fn test_encode_pads_and_folds_days() {
        assert_eq!(encode(0, 0, 0), "00:00:00");
        assert_eq!(encode(0, 2, 5), "02:05:00");
        assert_eq!(encode(1, 0, 0), "24:00:00");
        assert_eq!(encode(3, 2, 0), "74:00:00");
        assert_eq!(encode(0, 0, 125), "02:05:00");
        assert_eq!(encode(5, 0, 0), "120:00:00");
    }

    #[test]
    fn test_encode_clamps_negative_inputs() {
        assert_eq!(encode(-1, 2, -30), "02:00:00");
        assert_eq!(encode(-5, -5, -5), "00:00:00");
    }

    #[test]
    fn test_encode_fields_coerces_text() {
        assert_eq!(encode_fields("", "", ""), "00:00:00");
        assert_eq!(encode_fields("1", "abc", "30"), "24:30:00");
        assert_eq!(encode_fields(" 2 ", "9am", "-4"), "57:00:00");
    }

    #[test]
    fn test_parse_clock_only() {
        assert_eq!(parse_to_millis(Some("12:00:00")), 12 * HOUR);
        assert_eq!(parse_to_millis(Some("00:30:15")), 30 * MINUTE + 15_000);
    }

    #[test]
    fn test_parse_with_day_prefix() {
        assert_eq!(parse_to_millis(Some("1 00:00:00")), DAY);
        assert_eq!(parse_to_millis(Some("2 03:04:05")), 2 * DAY + 3 * HOUR + 4 * MINUTE + 5_000);
        assert_eq!(parse_to_millis(Some("  1 00:00:00  ")), DAY);
    }

    #[test]
    fn test_parse_is_total() {
        assert_eq!(parse_to_millis(None), 0);
        assert_eq!(parse_to_millis(Some("")), 0);
        assert_eq!(parse_to_millis(Some("   ")), 0);
        assert_eq!(parse_to_millis(Some("abc")), 0);
        assert_eq!(parse_to_millis(Some("x 01:00:00")), HOUR);
        assert_eq!(parse_to_millis(Some("1 2 3")), 0);
        assert_eq!(parse_to_millis(Some("::")), 0);
        assert_eq!(
            parse_to_millis(Some("5 99:99:99")),
            5 * DAY + 99 * HOUR + 99 * MINUTE + 99_000
        );
    }

    #[test]
    fn test_parse_missing_components_count_as_zero() {
        assert_eq!(parse_to_millis(Some("12")), 12 * HOUR);
        assert_eq!(parse_to_millis(Some("01:30")), HOUR + 30 * MINUTE);
        assert_eq!(parse_to_millis(Some("aa:10:bb")), 10 * MINUTE);
    }

    #[test]
    fn test_parse_negative_components_count_as_zero() {
        assert_eq!(parse_to_millis(Some("-1 01:00:00")), HOUR);
        assert_eq!(parse_to_millis(Some("-3:00:00")), 0);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(
            parse_to_millis(Some("9223372036854775807 00:00:00")),
            i64::MAX
        );
    }

    #[test]
    fn test_oversized_components_saturate_instead_of_vanishing() {
        assert_eq!(parse_to_millis(Some("99999999999999999999:00:00")), i64::MAX);
        assert_eq!(parse_to_millis(Some("99999999999999999999 00:00:00")), i64::MAX);
        assert_eq!(parse_to_millis(Some("00:99999999999999999999:00")), i64::MAX);

        let smaller = parse_to_millis(Some("9999999999999:00:00"));
        let larger = parse_to_millis(Some("99999999999999999999999:00:00"));
        assert!(larger >= smaller);
    }

    #[test]
    fn test_components_must_be_whole_digit_runs() {
        assert_eq!(parse_to_millis(Some("+2:00:00")), 2 * HOUR);
        assert_eq!(parse_to_millis(Some("2h:00:00")), 0);
        assert_eq!(parse_to_millis(Some("1.5:00:00")), 0);
    }

    #[test]
    fn test_encode_then_parse_recovers_minutes() {
        for days in [0, 1, 3] {
            for hours in [0, 1, 23, 48] {
                for minutes in [0, 1, 59, 90] {
                    let expected = ((days * 24 + hours) * 60 + minutes) * MINUTE;
                    assert_eq!(
                        parse_to_millis(Some(&encode(days, hours, minutes))),
                        expected,
                        "encode({days}, {hours}, {minutes})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(0), "00:00:00");
        assert_eq!(format_millis(12 * HOUR), "12:00:00");
        assert_eq!(format_millis(DAY + 90 * MINUTE), "1 01:30:00");
        assert_eq!(format_millis(-5), "00:00:00");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("9"), Some(9));
        assert_eq!(parse_leading_int("  14"), Some(14));
        assert_eq!(parse_leading_int("9am"), Some(9));
        assert_eq!(parse_leading_int("-2"), Some(-2));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_parse_as_signed_duration() {
        assert_eq!(parse(Some("00:01:00")), SignedDuration::from_secs(60));
        assert_eq!(parse(None), SignedDuration::ZERO);
    }
}
