// ============================================================================
// Engine Module
// Contains the parsing and rendering logic of the converter
// ============================================================================

mod converter;
mod parser;
mod renderer;

pub use converter::{convert_all, Converter, ConverterBuilder};
pub use parser::{normalize, parse, parse_with};
pub use renderer::{render, render_default, render_detailed, render_integer, FractionDigits, Rendered};
