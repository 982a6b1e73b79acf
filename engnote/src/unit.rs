//! Recognized unit symbols and the physical unit kinds they denote.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::UnitGroup;
use crate::error::{CodecError, ConfigError};

/// Longest unit symbol the trailing-match rule tries.
pub const MAX_SYMBOL_CHARS: usize = 3;

/// A unit with its accepted spellings.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSymbol {
    pub canonical: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UnitTable {
    units: Vec<UnitSymbol>,
    by_symbol: HashMap<String, usize>,
}

impl UnitTable {
    pub fn new(groups: &[UnitGroup]) -> Result<Self, ConfigError> {
        let mut units = Vec::with_capacity(groups.len());
        let mut by_symbol = HashMap::new();

        for (index, group) in groups.iter().enumerate() {
            let canonical = group
                .symbols
                .first()
                .ok_or_else(|| ConfigError::InvalidUnitSymbol(String::new()))?
                .clone();

            for symbol in &group.symbols {
                let len = symbol.chars().count();
                if len == 0 || len > MAX_SYMBOL_CHARS || symbol.chars().any(char::is_whitespace) {
                    return Err(ConfigError::InvalidUnitSymbol(symbol.clone()));
                }
                if by_symbol.insert(symbol.clone(), index).is_some() {
                    return Err(ConfigError::DuplicateAlias(symbol.clone()));
                }
            }

            units.push(UnitSymbol {
                canonical,
                aliases: group.symbols[1..].to_vec(),
            });
        }

        Ok(Self { units, by_symbol })
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    pub fn lookup(&self, symbol: &str) -> Option<&UnitSymbol> {
        self.by_symbol.get(symbol).map(|&i| &self.units[i])
    }

    pub fn canonical_for(&self, symbol: &str) -> Option<&str> {
        self.lookup(symbol).map(|u| u.canonical.as_str())
    }

    /// Match a unit against the last 3, then 2, then 1 characters of `text`.
    ///
    /// Returns the byte offset where the unit starts and the matched symbol.
    /// Strings of one character or less are never split.
    pub fn match_trailing<'a>(&self, text: &'a str) -> Option<(usize, &'a str)> {
        let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        if boundaries.len() <= 1 {
            return None;
        }
        (1..=MAX_SYMBOL_CHARS.min(boundaries.len()))
            .rev()
            .map(|n| boundaries[boundaries.len() - n])
            .find(|&start| self.contains(&text[start..]))
            .map(|start| (start, &text[start..]))
    }

    pub fn units(&self) -> &[UnitSymbol] {
        &self.units
    }
}

/// Physical unit kinds understood by the downstream calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Farad,
    Ampere,
    Ohm,
    Watt,
    Henry,
    Coulomb,
    Kelvin,
    Hertz,
    Volt,
    Joule,
    Siemens,
}

impl Unit {
    pub const ALL: [Unit; 11] = [
        Unit::Farad,
        Unit::Ampere,
        Unit::Ohm,
        Unit::Watt,
        Unit::Henry,
        Unit::Coulomb,
        Unit::Kelvin,
        Unit::Hertz,
        Unit::Volt,
        Unit::Joule,
        Unit::Siemens,
    ];

    /// Map a parsed unit symbol to its kind.
    pub fn from_symbol(symbol: &str) -> Result<Self, CodecError> {
        let unit = match symbol {
            "F" => Unit::Farad,
            "A" => Unit::Ampere,
            "\u{2126}" | "\u{3a9}" | "Ohm" | "R" => Unit::Ohm,
            "W" => Unit::Watt,
            "H" => Unit::Henry,
            "C" => Unit::Coulomb,
            "K" => Unit::Kelvin,
            "Hz" => Unit::Hertz,
            "V" => Unit::Volt,
            "J" => Unit::Joule,
            "S" => Unit::Siemens,
            other => return Err(CodecError::UnknownUnit(other.to_string())),
        };
        Ok(unit)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Farad => "F",
            Unit::Ampere => "A",
            Unit::Ohm => "\u{2126}",
            Unit::Watt => "W",
            Unit::Henry => "H",
            Unit::Coulomb => "C",
            Unit::Kelvin => "K",
            Unit::Hertz => "Hz",
            Unit::Volt => "V",
            Unit::Joule => "J",
            Unit::Siemens => "S",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Farad => "farad",
            Unit::Ampere => "ampere",
            Unit::Ohm => "ohm",
            Unit::Watt => "watt",
            Unit::Henry => "henry",
            Unit::Coulomb => "coulomb",
            Unit::Kelvin => "kelvin",
            Unit::Hertz => "hertz",
            Unit::Volt => "volt",
            Unit::Joule => "joule",
            Unit::Siemens => "siemens",
        }
    }
}

impl FromStr for Unit {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_symbol(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
