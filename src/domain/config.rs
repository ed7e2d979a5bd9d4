// ============================================================================
// Converter Configuration
// Target radices, fractional precision and input normalization policy
// ============================================================================

use crate::numeric::Radix;
use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits rendered when nothing else is configured
pub const DEFAULT_PRECISION: usize = 12;

/// Upper bound accepted by [`ConverterConfig::validate`]
pub const MAX_PRECISION: usize = 4096;

/// Number of distinct radices (2..=16); capacity of the target list
pub const MAX_TARGETS: usize = (Radix::MAX - Radix::MIN + 1) as usize;

// ============================================================================
// Prefix Policy
// ============================================================================

/// When a leading `0x` / `0X` is stripped from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrefixPolicy {
    /// Strip the prefix for every source radix, so decimal `"0x1"` reads as `"1"`
    #[default]
    Always,

    /// Strip only when the source radix is 16; elsewhere the `X` is an invalid digit
    HexOnly,
}

impl PrefixPolicy {
    /// Whether the prefix is stripped for input in `radix`
    #[inline]
    pub fn strips_for(self, radix: Radix) -> bool {
        match self {
            PrefixPolicy::Always => true,
            PrefixPolicy::HexOnly => radix == Radix::HEXADECIMAL,
        }
    }
}

// ============================================================================
// Converter Configuration
// ============================================================================

/// Configuration for a [`crate::engine::Converter`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Radices every input is rendered into, in insertion order, no duplicates
    pub targets: ArrayVec<Radix, MAX_TARGETS>,

    /// Maximum fractional digits per rendered value (truncating)
    pub precision: usize,

    /// How a leading `0x` is handled
    pub prefix_policy: PrefixPolicy,

    /// Render each target radix on its own scoped thread
    pub parallel_render: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::programmer_style()
    }
}

impl ConverterConfig {
    /// Create a configuration rendering into the given radices
    pub fn new(targets: impl IntoIterator<Item = Radix>) -> Self {
        Self {
            targets: ArrayVec::new(),
            precision: DEFAULT_PRECISION,
            prefix_policy: PrefixPolicy::default(),
            parallel_render: false,
        }
        .with_targets(targets)
    }

    /// Builder method: Replace the target radices (duplicates are dropped)
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Radix>) -> Self {
        self.targets.clear();
        for radix in targets {
            self.push_target(radix);
        }
        self
    }

    /// Builder method: Add a single target radix
    pub fn with_target(mut self, radix: Radix) -> Self {
        self.push_target(radix);
        self
    }

    /// Builder method: Set fractional precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set prefix policy
    pub fn with_prefix_policy(mut self, policy: PrefixPolicy) -> Self {
        self.prefix_policy = policy;
        self
    }

    /// Builder method: Toggle parallel rendering
    pub fn with_parallel_render(mut self, enabled: bool) -> Self {
        self.parallel_render = enabled;
        self
    }

    fn push_target(&mut self, radix: Radix) {
        // Capacity covers every distinct radix, so a deduplicated push always fits
        if !self.targets.contains(&radix) {
            let _ = self.targets.try_push(radix);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.targets.is_empty() {
            return Err("At least one target radix is required".to_string());
        }

        if self.precision > MAX_PRECISION {
            return Err(format!(
                "Precision {} exceeds the maximum of {}",
                self.precision, MAX_PRECISION
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Programmer's calculator layout
    /// - Binary, octal, decimal and hexadecimal columns
    /// - 12 fractional digits
    /// - `0x` stripped regardless of source radix
    pub fn programmer_style() -> Self {
        Self::new(Radix::STANDARD)
    }

    /// Same columns, but `0x` is only accepted on hexadecimal input
    pub fn strict_prefix() -> Self {
        Self::programmer_style().with_prefix_policy(PrefixPolicy::HexOnly)
    }

    /// Single decimal column with a wide fractional budget
    pub fn decimal_expansion(precision: usize) -> Self {
        Self::new([Radix::DECIMAL]).with_precision(precision)
    }
}
