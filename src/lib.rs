// ============================================================================
// Radix Converter Library
// Exact-precision numeral base conversion over arbitrary-width rationals
// ============================================================================

//! # Radix Converter
//!
//! Converts non-negative fractional numerals between bases 2 to 16 without
//! going through floating point.
//!
//! ## Features
//!
//! - **Exact parsing** into an arbitrary-width whole part plus an unreduced fraction
//! - **Deterministic truncation** of non-terminating fractional expansions
//! - **Structured parse errors** carrying the offending character
//! - **Event reporting** for logging and auditing conversion requests
//! - **Optional parallel rendering** of several target radices
//!
//! ## Example
//!
//! ```rust
//! use radix_converter::prelude::*;
//! use std::sync::Arc;
//!
//! // Stateless functions
//! let value = parse("A.F", Radix::HEXADECIMAL).unwrap();
//! assert_eq!(render(&value, Radix::DECIMAL, 12), "10.9375");
//!
//! // Configured converter with the four programmer columns
//! let converter =
//!     Converter::from_config(ConverterConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
//! let columns = converter.convert("0.1", Radix::DECIMAL).unwrap();
//! assert_eq!(columns.get(Radix::BINARY), Some("0.000110011001"));
//! assert_eq!(columns.get(Radix::HEXADECIMAL), Some("0.199999999999"));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Conversion, ConverterConfig, PrefixPolicy, DEFAULT_PRECISION};
    pub use crate::engine::{
        convert_all, parse, parse_with, render, render_default, Converter, ConverterBuilder,
    };
    pub use crate::interfaces::{
        ConversionEvent, ConversionId, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{ExactRational, NumericError, ParseError, Radix};
}
