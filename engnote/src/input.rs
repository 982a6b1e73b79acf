//! Typed entry point for callers holding values of mixed shape.

use serde::Serialize;

use crate::codec::{Codec, ParsedQuantity};
use crate::error::CodecError;

/// A value to normalize: a bare number, text, raw UTF-8 bytes, or a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    Scalar(f64),
    Text(&'a str),
    Bytes(&'a [u8]),
    Batch(Vec<Input<'a>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    Single(ParsedQuantity),
    Batch(Vec<Normalized>),
}

impl Normalized {
    pub fn as_single(&self) -> Option<&ParsedQuantity> {
        match self {
            Normalized::Single(q) => Some(q),
            Normalized::Batch(_) => None,
        }
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Input::Scalar(value)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl Codec {
    /// Normalize any [`Input`] to quantities.
    ///
    /// Scalars pass through without a unit. A batch fails as a whole on the
    /// first element that fails.
    pub fn normalize(&self, input: Input<'_>) -> Result<Normalized, CodecError> {
        match input {
            Input::Scalar(magnitude) => Ok(Normalized::Single(ParsedQuantity {
                magnitude,
                unit: String::new(),
            })),
            Input::Text(text) => self.parse(text.trim()).map(Normalized::Single),
            Input::Bytes(bytes) => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| CodecError::InvalidEncoding(e.to_string()))?;
                self.parse(text.trim()).map(Normalized::Single)
            }
            Input::Batch(items) => items
                .into_iter()
                .map(|item| self.normalize(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Normalized::Batch),
        }
    }
}
