//! Static word-to-value lexicon shared by segmentation and resolution.
//!
//! Digit words carry their numeric value. Marker words carry the hour bias
//! the resolver rules apply ("ตี" and "นาฬิกา" carry none; they only anchor a
//! pattern). The table is process-wide and immutable.

use once_cell::sync::Lazy;
use phf::phf_map;

use crate::error::ThaiTimeError;

static LEXICON: phf::Map<&'static str, u32> = phf_map! {
    "ศูนย์" => 0,
    "หนึ่ง" => 1,
    "สอง" => 2,
    "ยี่" => 2,
    "สาม" => 3,
    "สี่" => 4,
    "ห้า" => 5,
    "หก" => 6,
    "เจ็ด" => 7,
    "แปด" => 8,
    "เก้า" => 9,
    "สิบ" => 10,
    "เอ็ด" => 1,
    // hour-unit markers; "โมงเช้า" counting starts at 07:00
    "โมงเช้า" => 6,
    "โมงเย็น" => 13,
    "บ่าย" => 13,
    "บ่ายโมง" => 13,
    "ตี" => 0,
    "เที่ยงวัน" => 12,
    "เที่ยงคืน" => 0,
    "เที่ยง" => 12,
    "ทุ่ม" => 18,
    "นาฬิกา" => 0,
    "ครึ่ง" => 30,
};

/// Marker search order for clause splitting. This is priority order, not
/// document order: the first entry found anywhere in the phrase wins, so
/// compound markers must stay ahead of the words they contain ("โมงเช้า"
/// before "โมง", "เที่ยงคืน" before "เที่ยง").
pub(crate) const MARKERS: &[&str] = &[
    "โมงเช้า",
    "บ่ายโมง",
    "โมงเย็น",
    "โมง",
    "นาฬิกา",
    "ทุ่ม",
    "ตี",
    "เที่ยงคืน",
    "เที่ยงวัน",
    "เที่ยง",
];

/// "ตี" only splits a phrase when one of these compound forms confirms it.
/// "ตีหก" is not among them; the traditional clock has no sixth predawn hour
/// in speech.
pub(crate) const TI_COMPOUNDS: &[&str] = &["ตีหนึ่ง", "ตีสอง", "ตีสาม", "ตีสี่", "ตีห้า"];

/// Surface forms sorted longest first, so greedy tokenization prefers
/// "โมงเช้า" over a shorter match starting at the same position.
pub(crate) static SURFACE_FORMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut forms: Vec<&'static str> = LEXICON.keys().copied().collect();
    forms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    forms
});

/// Look up the numeric value of a surface form.
pub fn value_of(surface: &str) -> Result<u32, ThaiTimeError> {
    get(surface).ok_or_else(|| ThaiTimeError::UnknownToken(surface.to_string()))
}

pub(crate) fn get(surface: &str) -> Option<u32> {
    LEXICON.get(surface).copied()
}

/// Whether a surface form is in the lexicon.
pub fn is_known(surface: &str) -> bool {
    LEXICON.contains_key(surface)
}

/// All surface forms known to the lexicon, in no particular order.
pub fn surface_forms() -> impl Iterator<Item = &'static str> {
    LEXICON.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_known_words() {
        assert_eq!(value_of("ศูนย์"), Ok(0));
        assert_eq!(value_of("ยี่"), Ok(2));
        assert_eq!(value_of("เอ็ด"), Ok(1));
        assert_eq!(value_of("ทุ่ม"), Ok(18));
        assert_eq!(value_of("ครึ่ง"), Ok(30));
    }

    #[test]
    fn test_value_of_unknown_word() {
        assert_eq!(
            value_of("นาที"),
            Err(ThaiTimeError::UnknownToken("นาที".to_string()))
        );
    }

    #[test]
    fn test_every_marker_except_bare_mong_is_in_lexicon() {
        // "โมง" splits clauses but is deliberately absent from the lexicon;
        // the resolver matches it by literal comparison only.
        for marker in MARKERS {
            if *marker == "โมง" {
                assert!(!is_known(marker));
            } else {
                assert!(is_known(marker), "marker '{}' missing from lexicon", marker);
            }
        }
    }

    #[test]
    fn test_surface_forms_sorted_longest_first() {
        let forms = &*SURFACE_FORMS;
        for pair in forms.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
        }
        assert_eq!(forms.len(), surface_forms().count());
    }
}
