// ============================================================================
// Radix
// Validated numeral base (2..=16)
// ============================================================================

use super::digit::DIGITS;
use super::errors::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base of a positional numeral system.
///
/// Always between [`Radix::MIN`] and [`Radix::MAX`] inclusive, so every digit
/// value of a radix maps onto `0-9A-F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Radix(u8);

impl Radix {
    /// Smallest supported radix
    pub const MIN: u32 = 2;

    /// Largest supported radix
    pub const MAX: u32 = 16;

    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);

    /// The four radices shown side by side by a programmer's converter,
    /// in display order.
    pub const STANDARD: [Self; 4] = [Self::BINARY, Self::OCTAL, Self::DECIMAL, Self::HEXADECIMAL];

    /// Create a radix, rejecting values outside 2..=16.
    ///
    /// # Errors
    /// Returns `InvalidRadix` for unsupported bases.
    #[inline]
    pub fn new(value: u32) -> NumericResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(NumericError::InvalidRadix(value))
        }
    }

    /// Numeric value of the base.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }

    /// Digit symbols valid in this radix, in ascending value order.
    #[inline]
    pub fn charset(self) -> &'static [u8] {
        &DIGITS[..self.0 as usize]
    }

    /// Human-readable name for the common bases.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            2 => Some("binary"),
            8 => Some("octal"),
            10 => Some("decimal"),
            16 => Some("hexadecimal"),
            _ => None,
        }
    }

    /// Whether this is one of the four [`Radix::STANDARD`] bases.
    #[inline]
    pub fn is_standard(self) -> bool {
        Self::STANDARD.contains(&self)
    }
}

impl TryFrom<u32> for Radix {
    type Error = NumericError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.value()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
