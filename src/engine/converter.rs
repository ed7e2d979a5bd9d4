// ============================================================================
// Converter
// Parse once, render into every configured radix
// ============================================================================

use super::parser::{parse, parse_with};
use super::renderer::{render, render_detailed, Rendered};
use crate::domain::{Conversion, ConverterConfig, PrefixPolicy, DEFAULT_PRECISION};
use crate::interfaces::{ConversionEvent, ConversionId, EventHandler};
use crate::numeric::{ExactRational, ParseResult, Radix};
use chrono::Utc;
use std::sync::Arc;

/// Parse `text` in `source` and render it into each of `targets`.
///
/// Uses [`DEFAULT_PRECISION`] fractional digits. Duplicate targets collapse
/// into one entry.
///
/// # Errors
/// Any [`crate::numeric::ParseError`] from the parser; nothing is rendered then.
///
/// # Example
/// ```
/// use radix_converter::engine::convert_all;
/// use radix_converter::numeric::Radix;
///
/// let columns = convert_all("1010", Radix::BINARY, &Radix::STANDARD).unwrap();
/// assert_eq!(columns.get(Radix::OCTAL), Some("12"));
/// assert_eq!(columns.get(Radix::DECIMAL), Some("10"));
/// assert_eq!(columns.get(Radix::HEXADECIMAL), Some("A"));
/// ```
pub fn convert_all(text: &str, source: Radix, targets: &[Radix]) -> ParseResult<Conversion> {
    let value = parse(text, source)?;
    let mut conversion = Conversion::new(source, value);

    for &radix in targets {
        let rendered = render(conversion.value(), radix, DEFAULT_PRECISION);
        conversion.insert(radix, rendered);
    }

    Ok(conversion)
}

/// Configured converter that reports every request to an [`EventHandler`]
pub struct Converter {
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl Converter {
    /// Create a converter without validating `config`.
    ///
    /// An empty target list or a precision above
    /// [`crate::domain::MAX_PRECISION`] is accepted here. Use
    /// [`Converter::from_config`] or [`ConverterBuilder`] to have the
    /// configuration checked.
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Create a converter after validating `config`
    pub fn from_config(
        config: ConverterConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::new(config, event_handler))
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Parse `text` written in `source` and render it into every target radix
    pub fn convert(&self, text: &str, source: Radix) -> ParseResult<Conversion> {
        let id = ConversionId::new();
        let mut events = vec![ConversionEvent::ConversionRequested {
            id,
            source,
            input_len: text.len(),
            timestamp: Utc::now(),
        }];

        let value = match parse_with(text, source, self.config.prefix_policy) {
            Ok(value) => value,
            Err(error) => {
                events.push(ConversionEvent::ParseFailed {
                    id,
                    error,
                    timestamp: Utc::now(),
                });
                self.event_handler.on_events(events);
                return Err(error);
            },
        };

        let columns = if self.config.parallel_render && self.config.targets.len() > 1 {
            self.render_parallel(&value)
        } else {
            self.render_sequential(&value)
        };

        let truncated = columns.iter().any(|(_, r)| r.truncated);
        let mut conversion = Conversion::new(source, value);
        for (radix, rendered) in columns {
            conversion.insert(radix, rendered.text);
        }

        events.push(ConversionEvent::ConversionCompleted {
            id,
            targets: self.config.targets.to_vec(),
            truncated,
            timestamp: Utc::now(),
        });
        self.event_handler.on_events(events);

        Ok(conversion)
    }

    fn render_sequential(&self, value: &ExactRational) -> Vec<(Radix, Rendered)> {
        self.config
            .targets
            .iter()
            .map(|&radix| (radix, render_detailed(value, radix, self.config.precision)))
            .collect()
    }

    /// One scoped thread per target radix; falls back to sequential rendering
    /// if a worker does not complete.
    fn render_parallel(&self, value: &ExactRational) -> Vec<(Radix, Rendered)> {
        let precision = self.config.precision;

        let joined = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = self
                .config
                .targets
                .iter()
                .map(|&radix| {
                    scope.spawn(move |_| (radix, render_detailed(value, radix, precision)))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<_>, _>>()
        });

        match joined {
            Ok(Ok(columns)) => columns,
            _ => {
                tracing::warn!("Parallel render failed, rendering sequentially");
                self.render_sequential(value)
            },
        }
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use radix_converter::prelude::*;
/// use std::sync::Arc;
///
/// let converter = ConverterBuilder::new()
///     .targets([Radix::BINARY, Radix::HEXADECIMAL])
///     .precision(4)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// let columns = converter.convert("10.5", Radix::DECIMAL).unwrap();
/// assert_eq!(columns.get(Radix::BINARY), Some("1010.1"));
/// assert_eq!(columns.get(Radix::HEXADECIMAL), Some("A.8"));
/// ```
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Start from the programmer-style defaults
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Replace the target radices
    pub fn targets(mut self, targets: impl IntoIterator<Item = Radix>) -> Self {
        self.config = self.config.with_targets(targets);
        self
    }

    /// Add one target radix
    pub fn target(mut self, radix: Radix) -> Self {
        self.config = self.config.with_target(radix);
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    /// Only strip `0x` from hexadecimal input
    pub fn hex_only_prefix(mut self) -> Self {
        self.config.prefix_policy = PrefixPolicy::HexOnly;
        self
    }

    pub fn parallel_render(mut self, enabled: bool) -> Self {
        self.config.parallel_render = enabled;
        self
    }

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Converter, String> {
        Converter::from_config(self.config, event_handler)
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};
    use crate::numeric::ParseError;

    #[test]
    fn test_convert_all_standard_columns() {
        let columns = convert_all("A.F", Radix::HEXADECIMAL, &Radix::STANDARD).unwrap();

        assert_eq!(columns.len(), 4);
        assert_eq!(columns.source(), Radix::HEXADECIMAL);
        assert_eq!(columns.get(Radix::BINARY), Some("1010.1111"));
        assert_eq!(columns.get(Radix::OCTAL), Some("12.74"));
        assert_eq!(columns.get(Radix::DECIMAL), Some("10.9375"));
        assert_eq!(columns.get(Radix::HEXADECIMAL), Some("A.F"));
    }

    #[test]
    fn test_convert_all_duplicates_collapse() {
        let columns =
            convert_all("7", Radix::DECIMAL, &[Radix::BINARY, Radix::BINARY]).unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns.get(Radix::BINARY), Some("111"));
    }

    #[test]
    fn test_convert_all_error_has_no_partial_result() {
        assert_eq!(
            convert_all("12", Radix::BINARY, &Radix::STANDARD),
            Err(ParseError::InvalidDigit('2'))
        );
    }

    #[test]
    fn test_converter_emits_events() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let converter = Converter::new(ConverterConfig::default(), recorder.clone());

        converter.convert("0.1", Radix::DECIMAL).unwrap();
        let events = recorder.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            ConversionEvent::ConversionRequested { source, input_len: 3, .. } if source == Radix::DECIMAL
        ));
        assert!(matches!(
            &events[1],
            ConversionEvent::ConversionCompleted { truncated: true, targets, .. } if targets.len() == 4
        ));
        assert_eq!(events[0].id(), events[1].id());

        assert!(converter.convert("1.2.3", Radix::DECIMAL).is_err());
        let events = recorder.drain();
        assert!(matches!(
            events[1],
            ConversionEvent::ParseFailed {
                error: ParseError::MultipleDecimalPoints,
                ..
            }
        ));
    }

    #[test]
    fn test_converter_precision_and_prefix_policy() {
        let converter = ConverterBuilder::new()
            .targets([Radix::BINARY])
            .precision(8)
            .hex_only_prefix()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        let columns = converter.convert("0.1", Radix::DECIMAL).unwrap();
        assert_eq!(columns.get(Radix::BINARY), Some("0.00011001"));

        assert_eq!(
            converter.convert("0x1", Radix::DECIMAL),
            Err(ParseError::InvalidDigit('X'))
        );
        let hex = converter.convert("0x1", Radix::HEXADECIMAL).unwrap();
        assert_eq!(hex.get(Radix::BINARY), Some("1"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let all: Vec<Radix> = (Radix::MIN..=Radix::MAX)
            .filter_map(|r| Radix::new(r).ok())
            .collect();
        let sequential = ConverterBuilder::new()
            .targets(all.clone())
            .precision(40)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        let parallel = ConverterBuilder::from_config(sequential.config().clone())
            .parallel_render(true)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        for input in ["0", "FF.8", "123456789ABCDEF.0123", "0.1"] {
            assert_eq!(
                sequential.convert(input, Radix::HEXADECIMAL),
                parallel.convert(input, Radix::HEXADECIMAL)
            );
        }
    }

    #[test]
    fn test_new_skips_validation_from_config_does_not() {
        let empty = ConverterConfig::new(Vec::<Radix>::new());

        let unchecked = Converter::new(empty.clone(), Arc::new(NoOpEventHandler));
        let columns = unchecked.convert("5", Radix::DECIMAL).unwrap();
        assert!(columns.is_empty());

        assert!(Converter::from_config(empty, Arc::new(NoOpEventHandler)).is_err());
        let too_precise =
            ConverterConfig::default().with_precision(crate::domain::MAX_PRECISION + 1);
        assert!(Converter::from_config(too_precise, Arc::new(NoOpEventHandler)).is_err());
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let result = ConverterBuilder::new()
            .targets(Vec::<Radix>::new())
            .build(Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }
}
