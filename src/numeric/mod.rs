// ============================================================================
// Numeric Module
// Exact values, radices and digit handling for base conversion
// ============================================================================
//
// This module provides:
// - ExactRational: arbitrary-width whole part plus an unreduced fraction
// - Radix: validated base in 2..=16
// - Digit and charset helpers shared by parsing and rendering
// - ParseError / NumericError: error types with Result aliases
//
// Design principles:
// - No floating-point operations
// - Fallible construction returns Result (no panics)
// - Arbitrary-width integers (num-bigint) hold no global or thread-local state

mod digit;
mod errors;
mod exact_rational;
mod radix;

pub use digit::{digit_value, first_invalid_digit, is_valid_digit, Digit, DIGITS};
pub use errors::{NumericError, NumericResult, ParseError, ParseResult};
pub use exact_rational::ExactRational;
pub use radix::Radix;
