//! Thai numeral words for the 0-99 range the clock needs.

use once_cell::sync::Lazy;

use crate::error::ThaiTimeError;

const DIGITS: [&str; 10] = [
    "ศูนย์", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];

/// Digit surface forms sorted longest first for greedy matching. Includes
/// the irregular alternates "ยี่" (2, tens prefix) and "เอ็ด" (trailing 1).
static DIGIT_FORMS: Lazy<Vec<(&'static str, u32)>> = Lazy::new(|| {
    let mut forms: Vec<(&'static str, u32)> = DIGITS
        .iter()
        .enumerate()
        .map(|(value, form)| (*form, value as u32))
        .collect();
    forms.push(("สิบ", 10));
    forms.push(("ยี่", 2));
    forms.push(("เอ็ด", 1));
    forms.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    forms
});

/// Spell a number below 100 in Thai words.
///
/// Tens compose as digit + "สิบ", with "ยี่สิบ" for twenty and a bare "สิบ"
/// for ten; a trailing unit of one is the irregular "เอ็ด".
pub fn num_to_thaiword(n: u32) -> String {
    if n < 10 {
        return DIGITS[n as usize].to_string();
    }
    let mut text = match n / 10 {
        1 => "สิบ".to_string(),
        2 => "ยี่สิบ".to_string(),
        tens => format!("{}สิบ", DIGITS[(tens % 10) as usize]),
    };
    match n % 10 {
        0 => {}
        1 => text.push_str("เอ็ด"),
        units => text.push_str(DIGITS[units as usize]),
    }
    text
}

/// Parse a Thai numeral string below 100 back into a number.
///
/// Greedy digit-word segmentation followed by an accumulator scan: digit
/// words add their value, "สิบ" multiplies a non-zero accumulator by ten
/// ("ยี่สิบสาม" -> 23) or contributes ten on its own ("สิบเอ็ด" -> 11).
/// Compositions above 99 never occur on a clock face and are rejected, which
/// also bounds the accumulator (no repeated-"สิบ" phrase can run it up).
pub fn thaiword_to_num(text: &str) -> Result<u32, ThaiTimeError> {
    if text.is_empty() {
        return Err(ThaiTimeError::EmptyInput);
    }
    let mut rest = text;
    let mut n = 0u32;
    'scan: while !rest.is_empty() {
        for (form, value) in DIGIT_FORMS.iter() {
            if let Some(tail) = rest.strip_prefix(form) {
                if *form == "สิบ" {
                    n = if n == 0 { 10 } else { n * 10 };
                } else {
                    n += value;
                }
                if n > 99 {
                    return Err(ThaiTimeError::UnknownToken(text.to_string()));
                }
                rest = tail;
                continue 'scan;
            }
        }
        return Err(ThaiTimeError::UnknownToken(rest.to_string()));
    }
    Ok(n)
}
