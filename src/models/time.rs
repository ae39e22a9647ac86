//! Wall-clock time and daily time range models.
//!
//! Visits, bookings and staff hours are expressed as local wall-clock
//! times within a single day. `ClockTime` stores minutes since midnight
//! and renders as zero-padded `HH:MM`, which is also its serialized form.
//!
//! # Range Semantics
//! A `TimeRange` is a pair of wall-clock times written `HH:MM-HH:MM`.
//! Ranges are not required to be ordered: `22:00-06:00` is an overnight
//! shift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

/// Error returned when a `HH:MM` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time '{0}', expected HH:MM")]
pub struct ClockTimeParseError(pub String);

impl ClockTime {
    /// Creates a clock time from hour and minute.
    ///
    /// Returns `None` when the hour or minute is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    /// Creates a clock time on the hour.
    ///
    /// # Panics
    /// Panics if `hour >= 24`. Intended for constants and tests.
    pub const fn hour(hour: u8) -> Self {
        assert!(hour < 24, "hour out of range");
        Self {
            minutes: hour as u16 * 60,
        }
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour_of_day(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute_of_hour(&self) -> u8 {
        (self.minutes % 60) as u8
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour_of_day(), self.minute_of_hour())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ClockTimeParseError(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(err());
        }
        let hour: u8 = h.parse().map_err(|_| err())?;
        let minute: u8 = m.parse().map_err(|_| err())?;
        Self::new(hour, minute).ok_or_else(err)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// A daily time range, written `HH:MM-HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeRange {
    /// Range start.
    pub open: ClockTime,
    /// Range end; earlier than `open` for overnight ranges.
    pub close: ClockTime,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(open: ClockTime, close: ClockTime) -> Self {
        Self { open, close }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.open, self.close)
    }
}

impl FromStr for TimeRange {
    type Err = ClockTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (open, close) = s
            .split_once('-')
            .ok_or_else(|| ClockTimeParseError(s.to_string()))?;
        Ok(Self::new(open.parse()?, close.parse()?))
    }
}

impl TryFrom<String> for TimeRange {
    type Error = ClockTimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeRange> for String {
    fn from(value: TimeRange) -> Self {
        value.to_string()
    }
}
