// ABOUTME: Free-text height and weight parsing into canonical centimeters and pounds
// ABOUTME: Handles feet-inches, cm, m, in, lb, and kg notations without ever panicking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit parser
//!
//! Inputs are trimmed and lower-cased, then matched against unit tokens in a
//! fixed priority order. The first matching token decides the conversion, so
//! `"180cm"` never reaches the meters branch and `"70kg"` never reaches the
//! bare-number branch. Numbers are read as the longest decimal prefix of the
//! remaining text (`"1.8 eters"` reads as `1.8`). Any failed read yields
//! `None`: the unit could not be determined.

use hercules_core::constants::units::{CM_PER_FOOT, CM_PER_INCH, CM_PER_METER, LBS_PER_KG};
use hercules_core::models::{AgeInput, UnitInput};

/// Parse a free-text height into centimeters
///
/// Priority: `cm`, then `m`, then feet-inches (`5'10"`), then `in`, then a
/// bare number taken as centimeters.
///
/// # Examples
///
/// ```rust
/// use hercules_intelligence::units::parse_height;
///
/// assert_eq!(parse_height(Some("180cm")), Some(180.0));
/// assert_eq!(parse_height(Some("1.8m")), Some(180.0));
/// assert_eq!(parse_height(Some("5'")), None);
/// assert_eq!(parse_height(None), None);
/// ```
#[must_use]
pub fn parse_height(input: Option<&str>) -> Option<f64> {
    let input = normalize(input)?;

    if input.contains("cm") {
        return leading_float(&input.replacen("cm", "", 1));
    }

    if input.contains('m') {
        return leading_float(&input.replacen('m', "", 1)).map(|meters| meters * CM_PER_METER);
    }

    if input.contains('\'') {
        return parse_feet_inches(&input);
    }

    if input.contains("in") {
        return leading_float(&input.replacen("in", "", 1)).map(|inches| inches * CM_PER_INCH);
    }

    leading_float(&input)
}

/// Parse a free-text weight into pounds
///
/// Priority: `lb`/`lbs`, then `kg` (converted), then a bare number taken as
/// pounds.
///
/// # Examples
///
/// ```rust
/// use hercules_intelligence::units::parse_weight;
///
/// assert_eq!(parse_weight(Some("150lbs")), Some(150.0));
/// assert_eq!(parse_weight(Some("abc")), None);
/// ```
#[must_use]
pub fn parse_weight(input: Option<&str>) -> Option<f64> {
    let input = normalize(input)?;

    if input.contains("lb") {
        let stripped = input.replacen("lbs", "", 1).replacen("lb", "", 1);
        return leading_float(&stripped);
    }

    if input.contains("kg") {
        return leading_float(&input.replacen("kg", "", 1)).map(|kg| kg * LBS_PER_KG);
    }

    leading_float(&input)
}

/// Parse a height that may not be a string at all
///
/// Non-string JSON values cannot carry a unit and always yield `None`.
#[must_use]
pub fn parse_height_input(input: &UnitInput) -> Option<f64> {
    parse_height(input.as_text())
}

/// Parse a weight that may not be a string at all
#[must_use]
pub fn parse_weight_input(input: &UnitInput) -> Option<f64> {
    parse_weight(input.as_text())
}

/// Whole years from an age answer
///
/// Text is read as a leading integer (`"30.7"` is 30). Empty text and a
/// numeric zero count as unanswered.
#[must_use]
pub fn parse_age(input: &AgeInput) -> Option<i64> {
    match input {
        AgeInput::Text(text) if text.is_empty() => None,
        AgeInput::Text(text) => leading_int(text),
        // Safe: fractional ages truncate toward zero like the text path
        AgeInput::Number(years) if years.is_finite() && *years != 0.0 => {
            Some(years.trunc() as i64)
        }
        AgeInput::Number(_) => None,
    }
}

fn normalize(input: Option<&str>) -> Option<String> {
    let raw = input.filter(|text| !text.is_empty())?;
    Some(raw.trim().to_lowercase())
}

fn parse_feet_inches(input: &str) -> Option<f64> {
    let mut parts = input.split('\'');
    let feet = leading_float(parts.next().unwrap_or_default())?;
    let inches_part = parts.next().unwrap_or_default().replacen('"', "", 2);
    let inches = leading_float(&inches_part)?;

    Some(feet.mul_add(CM_PER_FOOT, inches * CM_PER_INCH))
}

/// Longest decimal prefix after leading whitespace
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// exponent only when digits follow the `e`.
fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = skip_sign(bytes, 0);

    let int_end = skip_digits(bytes, end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        let frac_count = frac_end - (end + 1);
        if digit_count + frac_count > 0 {
            digit_count += frac_count;
            end = frac_end;
        }
    }

    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_digits_start = skip_sign(bytes, end + 1);
        let exp_end = skip_digits(bytes, exp_digits_start);
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Leading integer after leading whitespace
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_start = skip_sign(bytes, 0);
    let end = skip_digits(bytes, digits_start);

    if end == digits_start {
        return None;
    }

    text[..end].parse::<i64>().ok()
}

fn skip_sign(bytes: &[u8], at: usize) -> usize {
    match bytes.get(at) {
        Some(b'+' | b'-') => at + 1,
        _ => at,
    }
}

fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let value = actual.unwrap_or(f64::NAN);
        assert!(
            (value - expected).abs() < 1e-9,
            "expected {expected}, got {actual:?}"
        );
    }

    #[test]
    fn test_height_feet_inches() {
        assert_close(parse_height(Some("5'10\"")), 177.8);
        assert_close(parse_height(Some("6'0\"")), 182.88);
        assert_close(parse_height(Some("  5'11  ")), 180.34);
    }

    #[test]
    fn test_height_metric_suffixes() {
        assert_eq!(parse_height(Some("180cm")), Some(180.0));
        assert_eq!(parse_height(Some("180 CM")), Some(180.0));
        assert_close(parse_height(Some("1.8m")), 180.0);
        assert_close(parse_height(Some("1.75 meters")), 175.0);
    }

    #[test]
    fn test_height_inches_and_bare_numbers() {
        assert_close(parse_height(Some("70in")), 177.8);
        assert_eq!(parse_height(Some("172.5")), Some(172.5));
    }

    #[test]
    fn test_height_absent_or_malformed() {
        assert_eq!(parse_height(None), None);
        assert_eq!(parse_height(Some("")), None);
        assert_eq!(parse_height(Some("   ")), None);
        assert_eq!(parse_height(Some("tall")), None);
        assert_eq!(parse_height(Some("5'")), None);
        assert_eq!(parse_height(Some("'10\"")), None);
        assert_eq!(parse_height(Some("cm")), None);
    }

    #[test]
    fn test_height_non_string_input() {
        assert_eq!(parse_height_input(&UnitInput::from(serde_json::json!(42))), None);
        assert_eq!(parse_height_input(&UnitInput::from(serde_json::json!(true))), None);
        assert_eq!(parse_height_input(&UnitInput::from("180cm")), Some(180.0));
    }

    #[test]
    fn test_height_round_trip_through_text() {
        let first = parse_height(Some("180cm"));
        let rendered = first.map(|cm| cm.to_string());
        assert_eq!(parse_height(rendered.as_deref()), first);

        let feet = parse_height(Some("5'10\""));
        let rendered = feet.map(|cm| cm.to_string());
        assert_eq!(parse_height(rendered.as_deref()), feet);
    }

    #[test]
    fn test_weight_units() {
        assert_eq!(parse_weight(Some("150lbs")), Some(150.0));
        assert_eq!(parse_weight(Some("150 lb")), Some(150.0));
        assert_close(parse_weight(Some("68kg")), 149.914_16);
        assert_close(parse_weight(Some("70 KG")), 154.3234);
        assert_eq!(parse_weight(Some("150")), Some(150.0));
    }

    #[test]
    fn test_weight_failures() {
        assert_eq!(parse_weight(Some("abc")), None);
        assert_eq!(parse_weight(Some("lbs")), None);
        assert_eq!(parse_weight(Some("")), None);
        assert_eq!(parse_weight(None), None);
        assert_eq!(parse_weight_input(&UnitInput::from(serde_json::json!(150))), None);
    }

    #[test]
    fn test_leading_float_prefix_rules() {
        assert_eq!(leading_float("  12.5abc"), Some(12.5));
        assert_eq!(leading_float("-3"), Some(-3.0));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("5."), Some(5.0));
        assert_eq!(leading_float("1e3x"), Some(1000.0));
        assert_eq!(leading_float("2e"), Some(2.0));
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("-"), None);
    }

    #[test]
    fn test_age_parsing() {
        assert_eq!(parse_age(&AgeInput::Text("30".into())), Some(30));
        assert_eq!(parse_age(&AgeInput::Text("30.7".into())), Some(30));
        assert_eq!(parse_age(&AgeInput::Text(" 25 years".into())), Some(25));
        assert_eq!(parse_age(&AgeInput::Text(String::new())), None);
        assert_eq!(parse_age(&AgeInput::Text("old".into())), None);
        assert_eq!(parse_age(&AgeInput::Number(42.0)), Some(42));
        assert_eq!(parse_age(&AgeInput::Number(0.0)), None);
    }
}
