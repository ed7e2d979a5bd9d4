// ============================================================================
// Domain Models Module
// Converter configuration and conversion results
// ============================================================================

pub mod config;
pub mod conversion;

pub use config::{ConverterConfig, PrefixPolicy, DEFAULT_PRECISION, MAX_PRECISION, MAX_TARGETS};
pub use conversion::Conversion;
