//! Minute-clause resolution.

use log::debug;

use crate::lexicon;

/// Accumulate a minute value from an ordered token sequence.
///
/// Known digit words add their value; "สิบ" multiplies a non-zero
/// accumulator by ten (composing "สิบเจ็ด" -> 17) or contributes ten on its
/// own; "ครึ่ง" carries its lexicon value 30, which also covers the lone
/// half-hour clause. Tokens outside the lexicon (the "นาที" suffix, stray
/// text) are skipped, so a clause with no digit words resolves to zero.
/// This is the one defined fallback in the reverse path, not an error. The
/// accumulator saturates instead of wrapping, so a degenerate clause of
/// repeated "สิบ" cannot panic.
pub(crate) fn resolve_minute(tokens: &[&str]) -> u32 {
    let mut minute: u32 = 0;
    for token in tokens {
        match lexicon::get(token) {
            Some(_) if *token == "สิบ" => {
                minute = if minute == 0 { 10 } else { minute.saturating_mul(10) };
            }
            Some(value) => minute = minute.saturating_add(value),
            None => {}
        }
    }
    debug!("Minute clause {:?} resolved to {}", tokens, minute);
    minute
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_accumulation() {
        let cases = vec![
            (vec!["ครึ่ง"], 30),
            (vec!["สิบ", "เจ็ด", "นาที"], 17),
            (vec!["สาม", "สิบ", "นาที"], 30),
            (vec!["สี่", "สิบ", "ห้า", "นาที"], 45),
            (vec!["สิบ", "นาที"], 10),
            (vec!["สิบ", "เอ็ด", "นาที"], 11),
            (vec!["ห้า", "นาที"], 5),
        ];
        for (tokens, expected) in cases {
            assert_eq!(resolve_minute(&tokens), expected, "Failed for tokens: {:?}", tokens);
        }
    }

    #[test]
    fn test_clause_without_digits_falls_back_to_zero() {
        assert_eq!(resolve_minute(&["นาที"]), 0);
        assert_eq!(resolve_minute(&[]), 0);
    }

    #[test]
    fn test_repeated_tens_saturate_instead_of_wrapping() {
        let tokens = vec!["สิบ"; 20];
        assert_eq!(resolve_minute(&tokens), u32::MAX);
    }
}
