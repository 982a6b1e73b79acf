//! engnote - engineering-notation codec for electrical quantities
//!
//! This library parses human-typed values such as `1k234Ω`, `4µA`,
//! `1,234.56kΩ` or `1R2` into a magnitude and a unit symbol, and formats
//! magnitudes back into compact 3-digit strings with an SI suffix.
//!
//! # Quick Start
//!
//! ```
//! use engnote::Codec;
//!
//! let codec = Codec::builtin().unwrap();
//!
//! let q = codec.parse("2mV").unwrap();
//! assert_eq!(q.magnitude, 0.002);
//! assert_eq!(q.unit, "V");
//!
//! assert_eq!(codec.format(1234.5).unwrap(), "1.23 k");
//!
//! let scale = codec.auto_scale(&[1e-3, 2e-3, 1.5e-3]);
//! assert_eq!(scale.suffix, "m");
//! ```
//!
//! # Features
//!
//! - **Parsing**: thousands separators in either locale, suffix as decimal
//!   point (`4k7`), resistor `R` notation, unit-prefix markers (`°`, `Δ`)
//! - **Formatting**: 3 visible digits, yocto..yotta suffixes
//! - **Auto-scaling**: one shared suffix for a batch of values
//! - **Configurable tables**: replace the built-in suffix/unit tables with JSON

pub mod codec;
pub mod config;
pub mod error;
pub mod input;
pub mod suffix;
pub mod unit;

// Re-export main types
pub use codec::{normalize_separators, Codec, ParsedQuantity, Scale, Split};
pub use config::{CodecConfig, SuffixGroup, UnitGroup};
pub use error::{CodecError, ConfigError};
pub use input::{Input, Normalized};
pub use suffix::{SuffixEntry, SuffixTable};
pub use unit::{Unit, UnitSymbol, UnitTable};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Codec, CodecConfig, CodecError, ConfigError, ParsedQuantity, Scale, Unit};
}
