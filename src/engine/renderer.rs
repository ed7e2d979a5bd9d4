// ============================================================================
// Numeral Renderer
// ExactRational -> text in a target radix with truncated fraction
// ============================================================================

use crate::domain::DEFAULT_PRECISION;
use crate::numeric::{Digit, ExactRational, Radix};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use smallvec::SmallVec;

/// Render the whole part of a value in `radix`. Zero renders as `"0"`.
pub fn render_integer(value: &BigUint, radix: Radix) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let base = BigUint::from(radix.value());
    let mut rest = value.clone();
    let mut digits: SmallVec<[char; 64]> = SmallVec::new();

    // Least significant first, reversed below
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&base);
        digits.push(low_digit(&remainder).to_char());
        rest = quotient;
    }

    digits.iter().rev().collect()
}

/// Render `value` in `radix` with at most `precision` fractional digits.
///
/// Integral values render without a point. Non-terminating expansions are
/// truncated, never rounded, so a longer precision only ever appends digits.
/// A non-zero fraction always shows at least one digit, even at precision 0.
///
/// # Example
/// ```
/// use radix_converter::engine::{parse, render};
/// use radix_converter::numeric::Radix;
///
/// let tenth = parse("0.1", Radix::DECIMAL).unwrap();
/// assert_eq!(render(&tenth, Radix::BINARY, 8), "0.00011001");
/// ```
pub fn render(value: &ExactRational, radix: Radix, precision: usize) -> String {
    render_detailed(value, radix, precision).text
}

/// Rendered text plus whether the fractional expansion was cut short
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Digits remained beyond the precision budget
    pub truncated: bool,
}

/// [`render`], also reporting whether the output is exact.
pub fn render_detailed(value: &ExactRational, radix: Radix, precision: usize) -> Rendered {
    let mut text = render_integer(value.int_part(), radix);
    if value.is_integer() {
        return Rendered {
            text,
            truncated: false,
        };
    }

    text.push('.');
    let before = text.len();
    let mut digits = FractionDigits::new(value, radix);
    text.extend(digits.by_ref().take(precision).map(Digit::to_char));

    if text.len() == before {
        text.push('0');
    }

    Rendered {
        text,
        truncated: !digits.is_exhausted(),
    }
}

/// [`render`] with [`DEFAULT_PRECISION`] fractional digits.
pub fn render_default(value: &ExactRational, radix: Radix) -> String {
    render(value, radix, DEFAULT_PRECISION)
}

/// Fractional digits of a value in a target radix, by long multiplication.
///
/// Ends once the remaining numerator is zero (terminating expansion);
/// otherwise it is unbounded and callers cap it with `take`.
#[derive(Debug, Clone)]
pub struct FractionDigits<'a> {
    numerator: BigUint,
    denominator: &'a BigUint,
    radix: Radix,
}

impl<'a> FractionDigits<'a> {
    pub fn new(value: &'a ExactRational, radix: Radix) -> Self {
        Self {
            numerator: value.frac_numerator().clone(),
            denominator: value.frac_denominator(),
            radix,
        }
    }

    /// No digits remain; the expansion terminated.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl Iterator for FractionDigits<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.numerator.is_zero() {
            return None;
        }

        self.numerator *= self.radix.value();
        let (digit, rest) = self.numerator.div_rem(self.denominator);
        self.numerator = rest;

        Some(low_digit(&digit))
    }
}

/// Digit for a value known to be below the radix.
#[inline]
fn low_digit(value: &BigUint) -> Digit {
    let low = value.iter_u32_digits().next().unwrap_or(0);
    Digit::from_value(low).unwrap_or_default()
}
