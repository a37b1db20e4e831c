//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in a time zone via the
/// `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, IST, JST)
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    zone: TimeZone,
}

impl<'a> LocalDateTime<'a> {
    pub fn in_zone(timestamp: &'a Timestamp, zone: TimeZone) -> Self {
        Self { timestamp, zone }
    }
}

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.zone.clone())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
