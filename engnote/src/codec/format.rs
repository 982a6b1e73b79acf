//! Quantity to string, with 3 visible digits and an SI suffix.

use crate::error::CodecError;

use super::{scale_pow10, Codec};

/// Decimal places that leave exactly 3 visible digits for `abs` in [1, 1000).
fn decimals_for(abs: f64) -> usize {
    if abs < 10.0 {
        2
    } else if abs < 100.0 {
        1
    } else {
        0
    }
}

/// Render a pre-scaled value with 3 visible digits.
///
/// Returns the text and the absolute value it rounds to. Rounding may carry
/// into the next decade (9.996 renders as "10.0", not "10.00").
pub(crate) fn three_digits(value: f64) -> (String, f64) {
    let decimals = decimals_for(value.abs());
    let text = format!("{:.*}", decimals, value);
    let rounded = text.parse::<f64>().map(f64::abs).unwrap_or(0.0);

    let carried = decimals_for(rounded);
    if carried < decimals {
        (format!("{:.*}", carried, value), rounded)
    } else {
        (text, rounded)
    }
}

/// `<digits> <suffix><unit>`, without the space when both are empty.
pub(crate) fn join(digits: &str, suffix: &str, unit: &str) -> String {
    if suffix.is_empty() && unit.is_empty() {
        digits.to_string()
    } else {
        format!("{} {}{}", digits, suffix, unit)
    }
}

impl Codec {
    /// Format a magnitude with an SI suffix and no unit.
    pub fn format(&self, magnitude: f64) -> Result<String, CodecError> {
        self.format_with_unit(magnitude, "")
    }

    /// Format a magnitude with an SI suffix followed by `unit`.
    ///
    /// Fails with [`CodecError::OutOfRange`] when the value needs the yocto
    /// or yotta bucket, or beyond.
    pub fn format_with_unit(&self, magnitude: f64, unit: &str) -> Result<String, CodecError> {
        let out_of_range = || CodecError::OutOfRange(magnitude);
        if !magnitude.is_finite() {
            return Err(out_of_range());
        }
        // Avoid rendering "-0.00".
        let magnitude = if magnitude == 0.0 { 0.0 } else { magnitude };

        let min = self.suffixes().min_bucket();
        let max = self.suffixes().max_bucket();

        let mut bucket = if magnitude == 0.0 {
            0
        } else {
            (magnitude.abs().log10() / 3.0).floor() as i32
        };
        if bucket < min - 1 || bucket > max + 1 {
            return Err(out_of_range());
        }

        // log10 of an exact power of 1000 can land one bucket off.
        let mut scaled = scale_pow10(magnitude, -3 * bucket);
        if scaled.abs() >= 1000.0 {
            bucket += 1;
            scaled = scale_pow10(magnitude, -3 * bucket);
        } else if magnitude != 0.0 && scaled.abs() < 1.0 {
            bucket -= 1;
            scaled = scale_pow10(magnitude, -3 * bucket);
        }

        let (mut digits, rounded) = three_digits(scaled);
        if rounded >= 1000.0 {
            bucket += 1;
            digits = three_digits(scale_pow10(magnitude, -3 * bucket)).0;
        }

        if bucket <= min || bucket >= max {
            return Err(out_of_range());
        }
        let suffix = self.suffixes().suffix_for(bucket).unwrap_or_default();

        let text = join(&digits, suffix, unit);
        tracing::debug!("Formatted {} as {:?}", magnitude, text);
        Ok(text)
    }
}
