// ============================================================================
// Exact Rational
// Arbitrary-width whole part plus an unreduced fraction
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale a `rust_decimal::Decimal` can carry.
const DECIMAL_MAX_SCALE: u32 = 28;

/// Width of the `rust_decimal::Decimal` mantissa in bits.
const DECIMAL_MANTISSA_BITS: u64 = 96;

/// Non-negative number held exactly as `int_part + frac_numerator / frac_denominator`.
///
/// The denominator is kept exactly as the parser produced it (a power of the
/// source radix) and is never reduced, so two values can be numerically equal
/// while comparing unequal with `==`. Use [`ExactRational::numerically_eq`] for
/// value comparison.
///
/// # Invariant
/// `frac_denominator > 0` and `frac_numerator < frac_denominator`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawExactRational")
)]
pub struct ExactRational {
    int_part: BigUint,
    frac_numerator: BigUint,
    frac_denominator: BigUint,
}

impl ExactRational {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a whole part and a fraction.
    ///
    /// # Errors
    /// Returns `InvalidFraction` if the denominator is zero or the numerator
    /// is not strictly below it.
    pub fn from_parts(
        int_part: BigUint,
        frac_numerator: BigUint,
        frac_denominator: BigUint,
    ) -> NumericResult<Self> {
        if frac_denominator.is_zero() || frac_numerator >= frac_denominator {
            return Err(NumericError::InvalidFraction);
        }

        Ok(Self {
            int_part,
            frac_numerator,
            frac_denominator,
        })
    }

    /// Create a whole number (fraction `0/1`).
    pub fn from_integer(int_part: impl Into<BigUint>) -> Self {
        Self {
            int_part: int_part.into(),
            frac_numerator: BigUint::zero(),
            frac_denominator: BigUint::from(1u8),
        }
    }

    /// Zero, with an empty fraction.
    pub fn zero() -> Self {
        Self::from_integer(0u8)
    }

    /// Trusted constructor for callers that already hold the invariant.
    pub(crate) fn from_raw_parts(
        int_part: BigUint,
        frac_numerator: BigUint,
        frac_denominator: BigUint,
    ) -> Self {
        debug_assert!(!frac_denominator.is_zero());
        debug_assert!(frac_numerator < frac_denominator);
        Self {
            int_part,
            frac_numerator,
            frac_denominator,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn int_part(&self) -> &BigUint {
        &self.int_part
    }

    #[inline]
    pub fn frac_numerator(&self) -> &BigUint {
        &self.frac_numerator
    }

    #[inline]
    pub fn frac_denominator(&self) -> &BigUint {
        &self.frac_denominator
    }

    /// True when there is no fractional value (renders without a point).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.frac_numerator.is_zero()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.int_part.is_zero() && self.frac_numerator.is_zero()
    }

    /// Compare values regardless of how the fraction is scaled.
    ///
    /// `0.8` in base 16 (8/16) and `0.5` in base 10 (5/10) are numerically equal.
    pub fn numerically_eq(&self, other: &Self) -> bool {
        self.int_part == other.int_part
            && &self.frac_numerator * &other.frac_denominator
                == &other.frac_numerator * &self.frac_denominator
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Wire shape of [`ExactRational`]; checked by `from_parts` on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawExactRational {
    int_part: BigUint,
    frac_numerator: BigUint,
    frac_denominator: BigUint,
}

#[cfg(feature = "serde")]
impl TryFrom<RawExactRational> for ExactRational {
    type Error = NumericError;

    fn try_from(raw: RawExactRational) -> Result<Self, Self::Error> {
        Self::from_parts(raw.int_part, raw.frac_numerator, raw.frac_denominator)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl ExactRational {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// The fraction denominator is `10^scale` of the decimal.
    ///
    /// # Errors
    /// Returns `NegativeValue` for values below zero.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(NumericError::NegativeValue);
        }

        let mantissa = BigUint::from(d.mantissa().unsigned_abs());
        let denominator = BigUint::from(10u8).pow(d.scale());
        let (int_part, frac_numerator) = mantissa.div_rem(&denominator);

        Ok(Self::from_raw_parts(int_part, frac_numerator, denominator))
    }

    /// Convert to `rust_decimal::Decimal`, truncating the fraction to as many
    /// decimal places (at most 28) as the 96-bit mantissa allows.
    ///
    /// # Errors
    /// Returns `Overflow` if even the whole part does not fit.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let ten = BigUint::from(10u8);

        for scale in (0..=DECIMAL_MAX_SCALE).rev() {
            let factor = ten.pow(scale);
            let mantissa = &self.int_part * &factor
                + (&self.frac_numerator * &factor) / &self.frac_denominator;

            if mantissa.bits() <= DECIMAL_MANTISSA_BITS {
                let raw = mantissa.to_i128().ok_or(NumericError::Overflow)?;
                return Decimal::try_from_i128_with_scale(raw, scale)
                    .map_err(|_| NumericError::Overflow);
            }
        }

        Err(NumericError::Overflow)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for ExactRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.int_part)
        } else {
            write!(
                f,
                "{} + {}/{}",
                self.int_part, self.frac_numerator, self.frac_denominator
            )
        }
    }
}

impl Default for ExactRational {
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_from_parts() {
        let x = ExactRational::from_parts(big(10), big(15), big(16)).unwrap();
        assert_eq!(x.int_part(), &big(10));
        assert_eq!(x.frac_numerator(), &big(15));
        assert_eq!(x.frac_denominator(), &big(16));
        assert!(!x.is_integer());
    }

    #[test]
    fn test_from_parts_invalid() {
        assert_eq!(
            ExactRational::from_parts(big(1), big(16), big(16)),
            Err(NumericError::InvalidFraction)
        );
        assert_eq!(
            ExactRational::from_parts(big(1), big(0), big(0)),
            Err(NumericError::InvalidFraction)
        );
    }

    #[test]
    fn test_zero_fraction_is_integer() {
        // 1.000 in base 10: numerator 0, denominator kept at 1000
        let x = ExactRational::from_parts(big(1), big(0), big(1000)).unwrap();
        assert!(x.is_integer());
        assert!(!x.is_zero());
        assert!(ExactRational::zero().is_zero());
    }

    #[test]
    fn test_numerically_eq() {
        let hex_half = ExactRational::from_parts(big(0), big(8), big(16)).unwrap();
        let dec_half = ExactRational::from_parts(big(0), big(5), big(10)).unwrap();
        assert_ne!(hex_half, dec_half);
        assert!(hex_half.numerically_eq(&dec_half));

        let quarter = ExactRational::from_parts(big(0), big(1), big(4)).unwrap();
        assert!(!hex_half.numerically_eq(&quarter));
    }

    #[test]
    fn test_display() {
        let x = ExactRational::from_parts(big(10), big(15), big(16)).unwrap();
        assert_eq!(x.to_string(), "10 + 15/16");
        assert_eq!(ExactRational::from_integer(42u32).to_string(), "42");
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(109375, 4); // 10.9375
        let x = ExactRational::from_decimal(d).unwrap();
        assert_eq!(x.int_part(), &big(10));
        assert_eq!(x.frac_numerator(), &big(9375));
        assert_eq!(x.frac_denominator(), &big(10_000));

        let whole = ExactRational::from_decimal(Decimal::from(7)).unwrap();
        assert!(whole.is_integer());
        assert_eq!(whole.frac_denominator(), &big(1));

        assert_eq!(
            ExactRational::from_decimal(Decimal::new(-5, 1)),
            Err(NumericError::NegativeValue)
        );
    }

    #[test]
    fn test_to_decimal() {
        let x = ExactRational::from_parts(big(10), big(15), big(16)).unwrap();
        assert_eq!(x.to_decimal().unwrap(), Decimal::new(109375, 4));

        // 1/3 truncates at the widest scale that fits
        let third = ExactRational::from_parts(big(0), big(1), big(3)).unwrap();
        let d = third.to_decimal().unwrap();
        assert_eq!(d.scale(), 28);
        assert!(d.to_string().starts_with("0.3333333333"));
    }

    #[test]
    fn test_to_decimal_overflow() {
        let huge = ExactRational::from_integer(BigUint::from(1u8) << 100usize);
        assert_eq!(huge.to_decimal(), Err(NumericError::Overflow));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rejects_broken_fraction() {
        let zero_denominator = r#"{"int_part":[1],"frac_numerator":[5],"frac_denominator":[]}"#;
        assert!(serde_json::from_str::<ExactRational>(zero_denominator).is_err());

        let numerator_too_large = r#"{"int_part":[1],"frac_numerator":[16],"frac_denominator":[16]}"#;
        assert!(serde_json::from_str::<ExactRational>(numerator_too_large).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let x = ExactRational::from_parts(big(10), big(15), big(16)).unwrap();
        let json = serde_json::to_string(&x).unwrap();
        let back: ExactRational = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }
}
