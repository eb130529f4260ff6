//! 12-hour wall-clock time parsing.
//!
//! Schedules carry times as text such as `"9:30 AM"`, `"12:05 pm"` or
//! `"Start: 9:00 AM EST"`. Everything downstream works on minutes since
//! midnight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minutes in a day; valid clock values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors produced when a string holds no usable `H:MM AM/PM` time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("no H:MM AM/PM time found")]
    NotFound,

    #[error("hour must be 0-23, got {0}")]
    InvalidHour(u16),

    #[error("minute must be 00-59, got {0}")]
    InvalidMinute(u16),
}

/// A time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from minutes since midnight. Returns `None` past 23:59.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Minutes since midnight, in `0..=1439`.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour on the 24-hour clock.
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

/// Raw fields of a `H:MM AM/PM` match, before range checks.
struct RawClock {
    hour: u16,
    minute: u16,
    pm: bool,
}

fn digits_value(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0, |acc, d| acc * 10 + u16::from(d - b'0'))
}

/// Match `\d{1,2}:\d{2}\s*(AM|PM)` (case-insensitive) starting at `start`.
fn match_at(bytes: &[u8], start: usize) -> Option<RawClock> {
    // Two-digit hours are tried first, then one.
    for hour_len in [2, 1] {
        let hour_end = start + hour_len;
        let Some(hour) = bytes.get(start..hour_end) else {
            continue;
        };
        if !hour.iter().all(u8::is_ascii_digit) || bytes.get(hour_end) != Some(&b':') {
            continue;
        }
        let Some(minute) = bytes.get(hour_end + 1..hour_end + 3) else {
            continue;
        };
        if !minute.iter().all(u8::is_ascii_digit) {
            continue;
        }

        let mut cursor = hour_end + 3;
        while bytes.get(cursor).is_some_and(u8::is_ascii_whitespace) {
            cursor += 1;
        }
        let Some(period) = bytes.get(cursor..cursor + 2) else {
            continue;
        };
        let pm = if period.eq_ignore_ascii_case(b"pm") {
            true
        } else if period.eq_ignore_ascii_case(b"am") {
            false
        } else {
            continue;
        };

        return Some(RawClock {
            hour: digits_value(hour),
            minute: digits_value(minute),
            pm,
        });
    }
    None
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    /// Parse the first `H:MM AM/PM` time found in `s`; surrounding text is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let raw = (0..bytes.len())
            .filter(|&i| bytes[i].is_ascii_digit())
            .find_map(|i| match_at(bytes, i))
            .ok_or(TimeParseError::NotFound)?;

        if raw.hour > 23 {
            return Err(TimeParseError::InvalidHour(raw.hour));
        }
        if raw.minute > 59 {
            return Err(TimeParseError::InvalidMinute(raw.minute));
        }

        let mut hour = raw.hour;
        if raw.pm && hour < 12 {
            hour += 12;
        } else if !raw.pm && hour == 12 {
            hour = 0;
        }

        Ok(Self(hour * 60 + raw.minute))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, period) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{}:{:02} {}", hour, self.minute(), period)
    }
}

/// Parse the first `H:MM AM/PM` in `text` into minutes since midnight.
///
/// Returns `None` when no such time is present or its fields are out of
/// range. Callers use this to drop unparseable items before layout.
pub fn parse_clock_minutes(text: &str) -> Option<u16> {
    text.parse::<ClockTime>().ok().map(ClockTime::minutes)
}
