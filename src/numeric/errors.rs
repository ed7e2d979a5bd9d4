// ============================================================================
// Numeric Errors
// Error types for numeral parsing and exact-value construction
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised while parsing a numeral string.
///
/// Parsing is all-or-nothing: when one of these is returned no value was
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseError {
    /// Nothing left after trimming and prefix stripping
    EmptyInput,
    /// More than one `.` separator
    MultipleDecimalPoints,
    /// Character is not a digit of the source radix (uppercased)
    InvalidDigit(char),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty input: nothing to convert"),
            ParseError::MultipleDecimalPoints => {
                write!(f, "invalid numeral: more than one decimal point")
            },
            ParseError::InvalidDigit(c) => {
                write!(f, "invalid digit '{}' for the selected radix", c.escape_default())
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised when constructing or converting exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Radix outside the supported 2..=16 range
    InvalidRadix(u32),
    /// Fraction numerator not below its denominator, or zero denominator
    InvalidFraction,
    /// Negative values cannot be represented
    NegativeValue,
    /// Value does not fit the requested target type
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidRadix(r) => {
                write!(f, "invalid radix {}: expected a value between 2 and 16", r)
            },
            NumericError::InvalidFraction => write!(
                f,
                "invalid fraction: numerator must be below a non-zero denominator"
            ),
            NumericError::NegativeValue => write!(f, "negative values are not supported"),
            NumericError::Overflow => write!(f, "value too large for the target type"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
