//! Parse and format pipelines built on the suffix and unit tables.
//!
//! A [`Codec`] is built once at startup and shared by reference. It holds no
//! mutable state, so a single instance can serve any number of threads.
//!
//! ```
//! use engnote::Codec;
//!
//! let codec = Codec::builtin().unwrap();
//! let q = codec.parse("4k7").unwrap();
//! assert_eq!(q.magnitude, 4700.0);
//! assert_eq!(codec.format_with_unit(q.magnitude, "R").unwrap(), "4.70 kR");
//! ```

pub mod format;
pub mod parse;
pub mod scale;

use serde::Serialize;

use crate::config::CodecConfig;
use crate::error::ConfigError;
use crate::suffix::SuffixTable;
use crate::unit::UnitTable;

pub use parse::normalize_separators;
pub use scale::Scale;

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuantity {
    pub magnitude: f64,
    /// Unit symbol as written (e.g. "R", "Ohm"). Empty when none was given.
    pub unit: String,
}

/// Input split into its textual parts, before numeric conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Split {
    /// Numeric text with "." as the only decimal point.
    pub number: String,
    pub suffix: String,
    pub unit: String,
}

#[derive(Debug, Clone)]
pub struct Codec {
    suffixes: SuffixTable,
    units: UnitTable,
    /// Unit-prefix markers plus whitespace, trimmed around the number.
    strippable: Vec<char>,
}

impl Codec {
    /// Build a codec from a table specification, validating it.
    pub fn new(config: &CodecConfig) -> Result<Self, ConfigError> {
        let suffixes = SuffixTable::new(&config.suffixes)?;
        let units = UnitTable::new(&config.units)?;
        let mut strippable: Vec<char> = config.unit_prefixes.chars().collect();
        strippable.extend([' ', '\t', '\n', '\r']);

        tracing::debug!(
            "Built codec with {} suffix buckets, {} units",
            suffixes.entries().len(),
            units.units().len()
        );

        Ok(Self {
            suffixes,
            units,
            strippable,
        })
    }

    /// Codec over the built-in tables.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(&CodecConfig::builtin()?)
    }

    pub fn suffixes(&self) -> &SuffixTable {
        &self.suffixes
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    fn is_strippable(&self, ch: char) -> bool {
        self.strippable.contains(&ch)
    }
}

/// `value * 10^exponent`. Negative exponents divide by the exact power of
/// ten so that "2m" comes out as exactly 0.002.
pub(crate) fn scale_pow10(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value * 10f64.powi(exponent)
    } else {
        value / 10f64.powi(-exponent)
    }
}
