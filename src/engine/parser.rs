// ============================================================================
// Numeral Parser
// Text in a source radix -> ExactRational
// ============================================================================

use crate::domain::PrefixPolicy;
use crate::numeric::{
    digit_value, first_invalid_digit, ExactRational, ParseError, ParseResult, Radix,
};
use num_bigint::BigUint;
use num_traits::Zero;

/// Canonical form of `raw` before validation.
///
/// Trims surrounding whitespace, uppercases ASCII letters and removes a
/// leading `0X` when `policy` allows it for `radix`.
///
/// Only ASCII is case-folded. Every digit is ASCII, so validity is unaffected,
/// but a non-ASCII letter is reported by `InvalidDigit` exactly as typed.
pub fn normalize(raw: &str, radix: Radix, policy: PrefixPolicy) -> String {
    let upper = raw.trim().to_ascii_uppercase();

    match upper.strip_prefix("0X") {
        Some(rest) if policy.strips_for(radix) => rest.to_string(),
        _ => upper,
    }
}

/// Parse a non-negative numeral written in `radix`.
///
/// A leading `0x` is stripped whatever the radix, so decimal `"0x12"` parses
/// as twelve. Use [`parse_with`] and [`PrefixPolicy::HexOnly`] to only accept
/// the prefix on hexadecimal input.
///
/// # Errors
/// - `EmptyInput` if nothing remains after normalization
/// - `MultipleDecimalPoints` if more than one `.` is present
/// - `InvalidDigit` with the first character that is not a digit of `radix`
///
/// # Example
/// ```
/// use radix_converter::engine::parse;
/// use radix_converter::numeric::Radix;
///
/// let value = parse("A.F", Radix::HEXADECIMAL).unwrap();
/// assert_eq!(value.int_part().to_string(), "10");
/// assert_eq!(value.frac_numerator().to_string(), "15");
/// assert_eq!(value.frac_denominator().to_string(), "16");
/// ```
pub fn parse(raw: &str, radix: Radix) -> ParseResult<ExactRational> {
    parse_with(raw, radix, PrefixPolicy::Always)
}

/// Parse with an explicit prefix policy. See [`parse`].
pub fn parse_with(raw: &str, radix: Radix, policy: PrefixPolicy) -> ParseResult<ExactRational> {
    let normalized = normalize(raw, radix, policy);
    if normalized.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut segments = normalized.split('.');
    let int_segment = segments.next().unwrap_or_default();
    let frac_segment = segments.next().unwrap_or_default();
    if segments.next().is_some() {
        return Err(ParseError::MultipleDecimalPoints);
    }

    // Validate everything before accumulating anything
    if let Some(c) = first_invalid_digit(int_segment, radix)
        .or_else(|| first_invalid_digit(frac_segment, radix))
    {
        return Err(ParseError::InvalidDigit(c));
    }

    let int_part = accumulate(int_segment, radix);
    let frac_numerator = accumulate(frac_segment, radix);
    // Validated segments are ASCII, so byte length is digit count
    let frac_denominator = num_traits::pow(BigUint::from(radix.value()), frac_segment.len());

    Ok(ExactRational::from_raw_parts(
        int_part,
        frac_numerator,
        frac_denominator,
    ))
}

/// Positional evaluation of an already validated digit string.
fn accumulate(segment: &str, radix: Radix) -> BigUint {
    let base = radix.value();

    segment
        .chars()
        .filter_map(|c| digit_value(c, radix))
        .fold(BigUint::zero(), |acc, digit| acc * base + digit)
}
