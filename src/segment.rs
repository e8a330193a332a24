//! Phrase cleanup, marker search, and clause tokenization.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ThaiTimeError;
use crate::lexicon::{MARKERS, SURFACE_FORMS, TI_COMPOUNDS};

/// Filler particles that carry no time information ("กว่า" = "-ish", "ๆ" =
/// repetition sign), plus any whitespace.
static FILLER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"กว่า|ๆ|\s+").unwrap());

/// Strip filler particles and whitespace before segmentation.
pub(crate) fn clean_phrase(phrase: &str) -> String {
    FILLER_RE.replace_all(phrase, "").into_owned()
}

/// Split a cleaned phrase into (hour clause, minute clause).
///
/// Markers are tried in fixed priority order, not by leftmost position; the
/// first marker contained anywhere in the phrase defines the split point,
/// directly after its first occurrence. "ตี" is special: it only splits when
/// one of the compound forms "ตีหนึ่ง".."ตีห้า" confirms it, and the split
/// lands after the whole compound.
pub(crate) fn split_clauses(phrase: &str) -> Result<(&str, &str), ThaiTimeError> {
    for marker in MARKERS {
        let split_at = if *marker == "ตี" {
            TI_COMPOUNDS
                .iter()
                .find_map(|compound| phrase.find(compound).map(|at| at + compound.len()))
        } else {
            phrase.find(marker).map(|at| at + marker.len())
        };
        if let Some(end) = split_at {
            debug!("Matched time marker '{}' in '{}'", marker, phrase);
            return Ok((&phrase[..end], &phrase[end..]));
        }
    }
    Err(ThaiTimeError::UnrecognizedPhrase(phrase.to_string()))
}

/// Tokenize a clause against the lexicon, greedy longest match first.
///
/// Runs of text matching no surface form are emitted as single unmatched
/// tokens; the resolvers decide whether those are ignorable (minute suffixes
/// like "นาที") or disqualifying (an hour clause that never resolves).
pub(crate) fn tokenize(clause: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut unmatched_start: Option<usize> = None;

    while pos < clause.len() {
        let matched =
            SURFACE_FORMS.iter().copied().find(|form| clause[pos..].starts_with(form));
        match matched {
            Some(form) => {
                if let Some(start) = unmatched_start.take() {
                    tokens.push(&clause[start..pos]);
                }
                tokens.push(&clause[pos..pos + form.len()]);
                pos += form.len();
            }
            None => {
                unmatched_start.get_or_insert(pos);
                match clause[pos..].chars().next() {
                    Some(c) => pos += c.len_utf8(),
                    None => break,
                }
            }
        }
    }
    if let Some(start) = unmatched_start {
        tokens.push(&clause[start..]);
    }

    debug!("Tokenized clause '{}' into {:?}", clause, tokens);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_phrase_strips_fillers() {
        assert_eq!(clean_phrase("บ่าย สอง โมง กว่า ๆ"), "บ่ายสองโมง");
        assert_eq!(clean_phrase("แปดโมง"), "แปดโมง");
    }

    #[test]
    fn test_split_prefers_compound_markers() {
        // "โมงเช้า" outranks the bare "โมง" it contains.
        assert_eq!(
            split_clauses("สองโมงเช้าสิบเจ็ดนาที"),
            Ok(("สองโมงเช้า", "สิบเจ็ดนาที"))
        );
        assert_eq!(split_clauses("บ่ายโมงครึ่ง"), Ok(("บ่ายโมง", "ครึ่ง")));
    }

    #[test]
    fn test_split_on_each_marker() {
        let cases = vec![
            ("แปดนาฬิกาสิบนาที", "แปดนาฬิกา", "สิบนาที"),
            ("หกโมงเย็นครึ่ง", "หกโมงเย็น", "ครึ่ง"),
            ("สองทุ่ม", "สองทุ่ม", ""),
            ("เที่ยงคืน", "เที่ยงคืน", ""),
            ("เที่ยงวัน", "เที่ยงวัน", ""),
            ("เที่ยงสิบห้านาที", "เที่ยง", "สิบห้านาที"),
            ("บ่ายสามโมง", "บ่ายสามโมง", ""),
        ];
        for (phrase, hour, minute) in cases {
            assert_eq!(split_clauses(phrase), Ok((hour, minute)), "Failed for phrase: {}", phrase);
        }
    }

    #[test]
    fn test_ti_requires_compound_confirmation() {
        assert_eq!(split_clauses("ตีสี่สิบนาที"), Ok(("ตีสี่", "สิบนาที")));
        // Bare "ตี" (and the unspoken "ตีหก") never splits.
        assert_eq!(
            split_clauses("ตีหก"),
            Err(ThaiTimeError::UnrecognizedPhrase("ตีหก".to_string()))
        );
    }

    #[test]
    fn test_split_fails_without_marker() {
        assert_eq!(
            split_clauses("พรุ่งนี้เช้า"),
            Err(ThaiTimeError::UnrecognizedPhrase("พรุ่งนี้เช้า".to_string()))
        );
    }

    #[test]
    fn test_tokenize_longest_match() {
        assert_eq!(tokenize("สองโมงเช้า"), vec!["สอง", "โมงเช้า"]);
        assert_eq!(tokenize("บ่ายโมง"), vec!["บ่ายโมง"]);
        assert_eq!(tokenize("เที่ยงคืน"), vec!["เที่ยงคืน"]);
        assert_eq!(tokenize("สิบเอ็ดนาฬิกา"), vec!["สิบ", "เอ็ด", "นาฬิกา"]);
    }

    #[test]
    fn test_tokenize_emits_unmatched_runs() {
        // "โมง" and "นาที" are not lexicon words; they surface as single
        // unmatched tokens.
        assert_eq!(tokenize("บ่ายสามโมง"), vec!["บ่าย", "สาม", "โมง"]);
        assert_eq!(tokenize("สิบเจ็ดนาที"), vec!["สิบ", "เจ็ด", "นาที"]);
        assert_eq!(tokenize(""), Vec::<&str>::new());
    }
}
