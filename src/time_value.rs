//! Validated wall-clock time values.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ThaiTimeError;

const TIME_FORMAT_WITH_SEC: &str = "%H:%M:%S";
const TIME_FORMAT_WITHOUT_SEC: &str = "%H:%M";

/// A wall-clock instant: hour, minute, second. No date, no timezone.
///
/// Deserialization runs through [`TimeValue::new`], so an out-of-range
/// value cannot enter through serde either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeValue")]
pub struct TimeValue {
    hour: u32,
    minute: u32,
    second: u32,
}

#[derive(Deserialize)]
struct RawTimeValue {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TryFrom<RawTimeValue> for TimeValue {
    type Error = ThaiTimeError;

    fn try_from(raw: RawTimeValue) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute, raw.second)
    }
}

impl TimeValue {
    /// Create a time value, rejecting out-of-range components.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ThaiTimeError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ThaiTimeError::InvalidTime { hour, minute, second });
        }
        Ok(Self { hour, minute, second })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

impl From<NaiveTime> for TimeValue {
    fn from(time: NaiveTime) -> Self {
        Self { hour: time.hour(), minute: time.minute(), second: time.second() }
    }
}

impl FromStr for TimeValue {
    type Err = ThaiTimeError;

    /// Parse a 24-hour clock string in `H:M` or `H:M:S` format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ThaiTimeError::EmptyInput);
        }
        NaiveTime::parse_from_str(s, TIME_FORMAT_WITH_SEC)
            .or_else(|_| NaiveTime::parse_from_str(s, TIME_FORMAT_WITHOUT_SEC))
            .map(Self::from)
            .map_err(|_| ThaiTimeError::MalformedTimeString(s.to_string()))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
