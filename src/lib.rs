//! Convert clock time to spoken Thai words and back.
//!
//! Thai tells time under three conventions: the official 24-hour clock
//! ("แปดนาฬิกา"), the traditional six-hour clock ("สองโมงเช้า", "บ่ายสองโมง",
//! "สองทุ่ม"), and a modified six-hour clock where mornings keep their
//! numeral ("แปดโมง"). The forward direction composes a phrase from a
//! numeric time; the reverse direction segments a spoken phrase, picks the
//! convention from its marker words, and reconstructs the 24-hour value,
//! including the irregular idioms ("บ่ายโมง" for 13:00, a lone "ทุ่ม" for
//! 19:00).
//!
//! # Examples
//!
//! ```
//! use thai_time::{time_to_words, words_to_time, Convention, Precision, TimeValue};
//!
//! let t = TimeValue::new(8, 17, 0).unwrap();
//! assert_eq!(time_to_words(t, Convention::TwentyFourHour, Precision::Auto), "แปดนาฬิกาสิบเจ็ดนาที");
//! assert_eq!(time_to_words(t, Convention::SixHour, Precision::Auto), "สองโมงเช้าสิบเจ็ดนาที");
//!
//! assert_eq!(words_to_time("บ่ายโมงครึ่ง").unwrap(), "13:30");
//! ```

pub mod error;
mod format;
mod hour;
pub mod lexicon;
mod minute;
mod segment;
mod time_value;
mod words;

pub use error::ThaiTimeError;
pub use format::{Convention, Precision};
pub use time_value::TimeValue;
pub use words::{num_to_thaiword, thaiword_to_num};

/// Spell out a time in Thai words under the given convention and precision.
pub fn time_to_words(time: TimeValue, convention: Convention, precision: Precision) -> String {
    format::format_time(time, convention, precision)
}

/// Parse a numeric time string (`H:M` or `H:M:S`, 24-hour clock) and spell
/// it out in Thai words.
pub fn time_string_to_words(
    time: &str,
    convention: Convention,
    precision: Precision,
) -> Result<String, ThaiTimeError> {
    Ok(format::format_time(time.parse()?, convention, precision))
}

/// Parse a spoken Thai time phrase into an `"H:MM"` string.
///
/// The hour prints without padding except midnight, which prints as "00";
/// the minute is always two digits. Filler particles ("กว่า", "ๆ") and
/// whitespace are stripped before segmentation.
pub fn words_to_time(phrase: &str) -> Result<String, ThaiTimeError> {
    if phrase.is_empty() {
        return Err(ThaiTimeError::EmptyInput);
    }
    let cleaned = segment::clean_phrase(phrase);
    let (hour_clause, minute_clause) = segment::split_clauses(&cleaned)?;

    let hour_tokens = segment::tokenize(hour_clause);
    let hour = hour::resolve_hour(&hour_tokens)?;

    // A single trailing character cannot hold a minute word.
    let minute = if minute_clause.chars().count() > 1 {
        minute::resolve_minute(&segment::tokenize(minute_clause))
    } else {
        0
    };

    let hour_text = if hour == 0 { "00".to_string() } else { hour.to_string() };
    Ok(format!("{}:{:02}", hour_text, minute))
}
