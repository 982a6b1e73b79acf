//! String to quantity.
//!
//! Accepted notations include:
//!
//! - `1,234.56kΩ` and `1.234,56kΩ` (thousands separators, either locale)
//! - `1k234`, `1µ234 Ω`, `4k7`, `1R2` (suffix as decimal point)
//! - `4µA`, `4e6A`, `4e6nA`
//! - `10 °C`, `5ΔV` (unit-prefix markers are ignored)
//!
//! Thousands separators and suffix-as-decimal-point may not be mixed.

use crate::error::CodecError;
use crate::unit::Unit;

use super::{scale_pow10, Codec, ParsedQuantity, Split};

/// Characters allowed in the numeric text that reaches `f64::from_str`.
fn is_numeric_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '-' | '.' | 'e')
}

/// Turn a locale-ambiguous number into one with "." as the decimal point.
///
/// When both "," and "." occur, whichever appears first is the thousands
/// separator and is removed. A lone "," is a decimal comma, so "1,234"
/// becomes "1.234".
pub fn normalize_separators(text: &str) -> String {
    match (text.find(','), text.find('.')) {
        (Some(comma), Some(dot)) if comma < dot => text.replace(',', ""),
        (Some(_), Some(_)) => text.replace('.', "").replace(',', "."),
        (Some(_), None) => text.replace(',', "."),
        _ => text.to_string(),
    }
}

impl Codec {
    /// Split `text` into `(remainder, unit)`.
    ///
    /// Unit-prefix markers and whitespace left in front of the unit are
    /// trimmed off the remainder. `unit` is empty when nothing matched.
    pub fn split_unit<'a>(&self, text: &'a str) -> (&'a str, &'a str) {
        let (rest, unit) = match self.units().match_trailing(text) {
            Some((start, unit)) => (&text[..start], unit),
            None => (text, ""),
        };
        (rest.trim_end_matches(|c: char| self.is_strippable(c)), unit)
    }

    /// Separate `text` into number, SI suffix and unit without converting.
    pub fn split(&self, text: &str) -> Result<Split, CodecError> {
        self.split_parts(text).map(|(split, _)| split)
    }

    /// Parse an engineering-notation string into magnitude and unit.
    pub fn parse(&self, text: &str) -> Result<ParsedQuantity, CodecError> {
        let (split, exponent) = self.split_parts(text)?;
        let value: f64 = split
            .number
            .parse()
            .map_err(|_| CodecError::InvalidNumericRemainder(split.number.clone()))?;
        let magnitude = scale_pow10(value, exponent);

        tracing::debug!("Parsed {:?} as {} {:?}", text, magnitude, split.unit);
        Ok(ParsedQuantity {
            magnitude,
            unit: split.unit,
        })
    }

    /// Parse and map the unit symbol to its kind. Fails with
    /// [`CodecError::UnknownUnit`] when the text carries no known unit.
    pub fn parse_unit(&self, text: &str) -> Result<(f64, Unit), CodecError> {
        let quantity = self.parse(text)?;
        let unit = Unit::from_symbol(&quantity.unit)?;
        Ok((quantity.magnitude, unit))
    }

    fn split_parts(&self, text: &str) -> Result<(Split, i32), CodecError> {
        let cleaned: String = normalize_separators(text)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let (rest, unit) = self.split_unit(&cleaned);
        if rest.is_empty() {
            return Err(CodecError::EmptyInput);
        }

        let (number, suffix) = self.locate_suffix(rest)?;
        let number = number
            .trim_matches(|c: char| self.is_strippable(c))
            .to_string();

        let mut unit = unit.to_string();
        let mut exponent = 0;
        if let Some(ch) = suffix {
            exponent = self.suffixes().exponent_for(ch).unwrap_or(0);
            // "R" is both a suffix and a unit: "4R7" is 4.7 ohms.
            let alias = ch.to_string();
            if unit.is_empty() && self.units().contains(&alias) {
                unit = alias;
            }
        }

        if !number.chars().all(is_numeric_char) {
            return Err(CodecError::InvalidNumericRemainder(number));
        }

        let split = Split {
            number,
            suffix: suffix.map(String::from).unwrap_or_default(),
            unit,
        };
        Ok((split, exponent))
    }

    /// Find the SI suffix, either trailing or standing in for the decimal
    /// point. Returns the numeric text with the suffix removed or replaced.
    fn locate_suffix(&self, rest: &str) -> Result<(String, Option<char>), CodecError> {
        let suffixes = self.suffixes();

        if let Some(last) = rest.chars().next_back().filter(|&c| suffixes.is_suffix(c)) {
            let number = &rest[..rest.len() - last.len_utf8()];
            if number.chars().any(|c| suffixes.is_suffix(c)) {
                return Err(CodecError::AmbiguousSuffix(rest.to_string()));
            }
            return Ok((number.to_string(), Some(last)));
        }

        let hits: Vec<(usize, char)> = rest
            .char_indices()
            .filter(|&(_, c)| suffixes.is_suffix(c))
            .collect();

        match hits.as_slice() {
            [] => Ok((rest.to_string(), None)),
            [(index, ch)] => {
                if rest.contains('.') {
                    return Err(CodecError::ConflictingSeparator(rest.to_string()));
                }
                if *index == 0 {
                    return Err(CodecError::LeadingSuffix(rest.to_string()));
                }
                let mut number = String::with_capacity(rest.len());
                number.push_str(&rest[..*index]);
                number.push('.');
                number.push_str(&rest[*index + ch.len_utf8()..]);
                Ok((number, Some(*ch)))
            }
            _ => Err(CodecError::AmbiguousSuffix(rest.to_string())),
        }
    }
}
