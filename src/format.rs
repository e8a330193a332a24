//! Forward formatting: numeric time to spoken Thai.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThaiTimeError;
use crate::time_value::TimeValue;
use crate::words::num_to_thaiword;

/// Thai clock-naming convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convention {
    /// "แปดนาฬิกา" style official time.
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// Traditional six-hour clock ("ตีสาม", "บ่ายสองโมง", "สองทุ่ม").
    #[serde(rename = "6h")]
    SixHour,
    /// Modified six-hour clock: mornings keep their numeral ("แปดโมง").
    #[serde(rename = "m6h")]
    ModifiedSixHour,
}

impl FromStr for Convention {
    type Err = ThaiTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(Self::TwentyFourHour),
            "6h" => Ok(Self::SixHour),
            "m6h" => Ok(Self::ModifiedSixHour),
            _ => Err(ThaiTimeError::UnsupportedConvention(s.to_string())),
        }
    }
}

/// How much of the minute/second tail to spell out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    /// Spell out only non-zero components.
    #[default]
    #[serde(rename = "auto")]
    Auto,
    /// Always spell out minutes, using the zero numeral when needed.
    #[serde(rename = "m")]
    Minutes,
    /// Always spell out minutes and seconds.
    #[serde(rename = "s")]
    Seconds,
}

impl FromStr for Precision {
    type Err = ThaiTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "m" => Ok(Self::Minutes),
            "s" => Ok(Self::Seconds),
            _ => Err(ThaiTimeError::UnsupportedPrecision(s.to_string())),
        }
    }
}

fn format_hour_24h(h: u32) -> String {
    format!("{}นาฬิกา", num_to_thaiword(h))
}

fn format_hour_6h(h: u32) -> String {
    match h {
        0 => "เที่ยงคืน".to_string(),
        1..=6 => format!("ตี{}", num_to_thaiword(h)),
        7..=11 => format!("{}โมงเช้า", num_to_thaiword(h - 6)),
        12 => "เที่ยง".to_string(),
        13 => "บ่ายโมง".to_string(),
        14..=17 => format!("บ่าย{}โมง", num_to_thaiword(h - 12)),
        18 => "หกโมงเย็น".to_string(),
        _ => format!("{}ทุ่ม", num_to_thaiword(h - 18)),
    }
}

fn format_hour_m6h(h: u32) -> String {
    match h {
        0 => "เที่ยงคืน".to_string(),
        1..=5 => format!("ตี{}", num_to_thaiword(h)),
        6..=11 => format!("{}โมง", num_to_thaiword(h)),
        12 => "เที่ยง".to_string(),
        13..=18 => format!("{}โมง", num_to_thaiword(h - 12)),
        _ => format!("{}ทุ่ม", num_to_thaiword(h - 18)),
    }
}

/// Compose the spoken phrase for a time value.
///
/// The half-hour shortcut "ครึ่ง" replaces the minute and second words iff
/// the minute is exactly 30, the second is exactly 0, and the convention is
/// one of the six-hour clocks. It never applies on the 24-hour clock.
pub(crate) fn format_time(
    time: TimeValue,
    convention: Convention,
    precision: Precision,
) -> String {
    let mut text = match convention {
        Convention::TwentyFourHour => format_hour_24h(time.hour()),
        Convention::SixHour => format_hour_6h(time.hour()),
        Convention::ModifiedSixHour => format_hour_m6h(time.hour()),
    };

    let half_past = time.minute() == 30
        && time.second() == 0
        && matches!(convention, Convention::SixHour | Convention::ModifiedSixHour);
    if half_past {
        text.push_str("ครึ่ง");
        return text;
    }

    let spell_minute = match precision {
        Precision::Auto => time.minute() != 0,
        Precision::Minutes | Precision::Seconds => true,
    };
    if spell_minute {
        text.push_str(&num_to_thaiword(time.minute()));
        text.push_str("นาที");
    }

    let spell_second = match precision {
        Precision::Auto => time.second() != 0,
        Precision::Minutes => false,
        Precision::Seconds => true,
    };
    if spell_second {
        text.push_str(&num_to_thaiword(time.second()));
        text.push_str("วินาที");
    }

    text
}
