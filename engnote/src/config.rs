//! Table specification for the codec.
//!
//! The default tables are embedded into the binary as JSON. A user-supplied
//! JSON file with the same layout can replace them, e.g. to add unit symbols:
//!
//! ```json
//! {
//!   "suffixes": [{ "exponent": -24, "aliases": ["y"] }, ...],
//!   "units": [{ "symbols": ["Ω", "Ohm", "R"] }, ...],
//!   "unit_prefixes": "Δ°"
//! }
//! ```
//!
//! Loading only deserializes. Validation happens in [`crate::Codec::new`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const EMBEDDED_TABLES: &str = include_str!("../tables/default.json");

/// One exponent bucket. The first alias is the canonical output string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuffixGroup {
    pub exponent: i32,
    pub aliases: Vec<String>,
}

/// One physical unit. The first symbol is canonical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitGroup {
    pub symbols: Vec<String>,
}

/// Complete description of the suffix and unit tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecConfig {
    pub suffixes: Vec<SuffixGroup>,
    pub units: Vec<UnitGroup>,
    /// Marker glyphs (delta, degree) allowed between the number and the unit.
    #[serde(default)]
    pub unit_prefixes: String,
}

impl CodecConfig {
    /// The tables compiled into the library.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json_str(EMBEDDED_TABLES)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table specification from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded {} suffix buckets and {} unit groups from {:?}",
            config.suffixes.len(),
            config.units.len(),
            path
        );
        Ok(config)
    }
}
