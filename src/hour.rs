//! Hour-clause disambiguation.
//!
//! Thai spoken hours are not a linear function of the numeral. Morning
//! clauses carry a +6 bias only below six, afternoon and evening clauses
//! carry +12 or +18, noon and midnight are fixed points, and two fully
//! lexicalized forms ("บ่ายโมง" for 13:00, a standalone "ทุ่ม" for 19:00)
//! follow no scheme at all. Each regime is an explicit rule below; the table
//! order encodes precedence for ambiguous clauses and must not be
//! reshuffled.

use log::debug;

use crate::error::ThaiTimeError;
use crate::lexicon;
use crate::words;

struct HourRule {
    name: &'static str,
    matches: fn(&[&str]) -> bool,
    resolve: fn(&[&str]) -> Result<u32, ThaiTimeError>,
}

fn first<'a>(tokens: &[&'a str]) -> &'a str {
    tokens.first().copied().unwrap_or("")
}

fn last<'a>(tokens: &[&'a str]) -> &'a str {
    tokens.last().copied().unwrap_or("")
}

const HOUR_RULES: &[HourRule] = &[
    HourRule {
        // "แปดนาฬิกา" -> 8, "ยี่สิบสามนาฬิกา" -> 23
        name: "24h-clock",
        matches: |t| t.len() > 1 && last(t) == "นาฬิกา" && lexicon::is_known(first(t)),
        resolve: |t| words::thaiword_to_num(&t[..t.len() - 1].concat()),
    },
    HourRule {
        // "ตีสาม" -> 3; "ตี" itself contributes no offset
        name: "predawn",
        matches: |t| first(t) == "ตี" && t.len() > 1 && lexicon::is_known(t[1]),
        resolve: |t| lexicon::value_of(t[1]),
    },
    HourRule {
        // "สองโมงเช้า" -> 8: morning counting restarts at 07:00, so values
        // below six gain the +6 bias. No spoken form puts a first token with
        // value >= 6 before "โมงเช้า", leaving the else branch unreachable
        // from well-formed input.
        name: "morning",
        matches: |t| last(t) == "โมงเช้า" && lexicon::is_known(first(t)),
        resolve: |t| {
            let value = lexicon::value_of(first(t))?;
            Ok(if value < 6 { value + 6 } else { value })
        },
    },
    HourRule {
        // "บ่ายสามโมง" -> 15
        name: "afternoon-baai",
        matches: |t| {
            (last(t) == "โมงเย็น" || last(t) == "โมง") && first(t) == "บ่าย" && t.len() > 1
        },
        resolve: |t| Ok(lexicon::value_of(t[1])? + 12),
    },
    HourRule {
        // "สี่โมง" -> 16, "หกโมงเย็น" -> 18. Afternoon reading wins for the
        // bare "Nโมง" clause that the modified clock also uses for mornings.
        name: "afternoon",
        matches: |t| (last(t) == "โมงเย็น" || last(t) == "โมง") && lexicon::is_known(first(t)),
        resolve: |t| Ok(lexicon::value_of(first(t))? + 12),
    },
    HourRule {
        name: "midnight",
        matches: |t| last(t) == "เที่ยงคืน",
        resolve: |_| Ok(0),
    },
    HourRule {
        name: "noon",
        matches: |t| last(t) == "เที่ยงวัน" || last(t) == "เที่ยง",
        resolve: |_| Ok(12),
    },
    HourRule {
        // lexicalized one o'clock in the afternoon
        name: "one-pm",
        matches: |t| first(t) == "บ่ายโมง",
        resolve: |_| Ok(13),
    },
    HourRule {
        // "สองทุ่ม" -> 20; a standalone "ทุ่ม" is the idiom for 19:00
        name: "evening",
        matches: |t| last(t) == "ทุ่ม",
        resolve: |t| {
            if t.len() == 1 {
                Ok(19)
            } else {
                Ok(lexicon::value_of(first(t))? + 18)
            }
        },
    },
];

/// Resolve an ordered hour-clause token sequence to an hour in 0-23.
/// First matching rule wins.
pub(crate) fn resolve_hour(tokens: &[&str]) -> Result<u32, ThaiTimeError> {
    for rule in HOUR_RULES {
        if (rule.matches)(tokens) {
            let hour = (rule.resolve)(tokens)?;
            debug!("Hour clause {:?} matched rule '{}' -> {}", tokens, rule.name, hour);
            return Ok(hour);
        }
    }
    Err(ThaiTimeError::UnrecognizedHourPattern(tokens.concat()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(tokens: &[&str]) -> Result<u32, ThaiTimeError> {
        resolve_hour(tokens)
    }

    #[test]
    fn test_24h_clause() {
        assert_eq!(resolve(&["แปด", "นาฬิกา"]), Ok(8));
        assert_eq!(resolve(&["ศูนย์", "นาฬิกา"]), Ok(0));
        assert_eq!(resolve(&["ยี่", "สิบ", "สาม", "นาฬิกา"]), Ok(23));
        assert_eq!(resolve(&["สิบ", "เอ็ด", "นาฬิกา"]), Ok(11));
    }

    #[test]
    fn test_predawn_clause() {
        assert_eq!(resolve(&["ตี", "หนึ่ง"]), Ok(1));
        assert_eq!(resolve(&["ตี", "ห้า"]), Ok(5));
    }

    #[test]
    fn test_morning_clause_gains_bias() {
        assert_eq!(resolve(&["หนึ่ง", "โมงเช้า"]), Ok(7));
        assert_eq!(resolve(&["สอง", "โมงเช้า"]), Ok(8));
        assert_eq!(resolve(&["ห้า", "โมงเช้า"]), Ok(11));
    }

    #[test]
    fn test_afternoon_clauses() {
        assert_eq!(resolve(&["บ่าย", "สอง", "โมง"]), Ok(14));
        assert_eq!(resolve(&["บ่าย", "ห้า", "โมง"]), Ok(17));
        assert_eq!(resolve(&["หก", "โมงเย็น"]), Ok(18));
        // bare "Nโมง" resolves as afternoon, never morning
        assert_eq!(resolve(&["สี่", "โมง"]), Ok(16));
        assert_eq!(resolve(&["หนึ่ง", "โมง"]), Ok(13));
    }

    #[test]
    fn test_fixed_points_and_idioms() {
        assert_eq!(resolve(&["เที่ยงคืน"]), Ok(0));
        assert_eq!(resolve(&["เที่ยงวัน"]), Ok(12));
        assert_eq!(resolve(&["เที่ยง"]), Ok(12));
        assert_eq!(resolve(&["บ่ายโมง"]), Ok(13));
        assert_eq!(resolve(&["ทุ่ม"]), Ok(19));
        assert_eq!(resolve(&["สอง", "ทุ่ม"]), Ok(20));
        assert_eq!(resolve(&["ห้า", "ทุ่ม"]), Ok(23));
    }

    #[test]
    fn test_unmatched_clause_fails() {
        // a bare marker with no numeral in front is no hour at all
        let cases: Vec<&[&str]> = vec![&["โมง"], &["นาฬิกา"], &["ขนม", "นาฬิกา"], &[]];
        for tokens in cases {
            assert_eq!(
                resolve(tokens),
                Err(ThaiTimeError::UnrecognizedHourPattern(tokens.concat())),
                "Failed for tokens: {:?}",
                tokens
            );
        }
    }
}
