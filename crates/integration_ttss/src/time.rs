//! Clock-time parsing and timestamp helpers

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc};

use crate::error::ParseError;

/// Parse a clock time in the exact `HH:MM` form; seconds are zero
pub fn parse_time(text: &str) -> Result<NaiveTime, ParseError> {
    let invalid = || ParseError::InvalidTime(text.to_string());

    let bytes = text.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }

    let field = |range: std::ops::Range<usize>| -> Result<u32, ParseError> {
        let digits = &bytes[range];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }
        Ok(digits
            .iter()
            .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0')))
    };

    let hour = field(0..2)?;
    let minute = field(3..5)?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

static LAST_TIMESTAMP_MILLIS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Wall-clock milliseconds since the epoch, never decreasing within the process
///
/// Only used as a cache-busting query parameter.
pub fn current_timestamp_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_TIMESTAMP_MILLIS.fetch_max(now, Ordering::Relaxed);
    previous.max(now)
}

/// Round to the start of the nearest minute
///
/// Seconds above 30 round up, carrying into minutes, hours and days;
/// anything up to and including 30 truncates.
pub fn round_to_nearest_minute<Tz: TimeZone>(dt: DateTime<Tz>) -> DateTime<Tz> {
    let seconds = dt.second();
    let nanos = dt.nanosecond();
    let truncated =
        dt - TimeDelta::seconds(i64::from(seconds)) - TimeDelta::nanoseconds(i64::from(nanos));

    if seconds > 30 {
        truncated + TimeDelta::minutes(1)
    } else {
        truncated
    }
}
