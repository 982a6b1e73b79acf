//! One shared SI suffix for a batch of values (e.g. a plot axis).

use serde::Serialize;

use super::format::{join, three_digits};
use super::Codec;

/// Shared scale chosen by [`Codec::auto_scale`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    pub bucket: i32,
    /// Factor that converts raw values into `suffix` units.
    pub multiplier: f64,
    pub suffix: String,
}

impl Scale {
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| v * self.multiplier).collect()
    }
}

impl Codec {
    /// Pick the suffix that represents as many `values` as possible with as
    /// few powers of ten as possible.
    ///
    /// The bucket is the rounded mean of `log10(|v|) / 3`, where zeros count
    /// as `log10 = 0`, clamped to the table (yocto and yotta included).
    pub fn auto_scale(&self, values: &[f64]) -> Scale {
        let min = self.suffixes().min_bucket();
        let max = self.suffixes().max_bucket();

        let log_sum: f64 = values
            .iter()
            .map(|v| v.abs().log10())
            .map(|l| if l == f64::NEG_INFINITY { 0.0 } else { l })
            .sum();
        let log_mean = if values.is_empty() {
            0.0
        } else {
            log_sum / values.len() as f64
        };

        let bucket = if log_mean.is_nan() {
            0
        } else {
            (log_mean / 3.0)
                .round_ties_even()
                .clamp(min as f64, max as f64) as i32
        };

        let scale = Scale {
            bucket,
            multiplier: 10f64.powi(-3 * bucket),
            suffix: self
                .suffixes()
                .suffix_for(bucket)
                .unwrap_or_default()
                .to_string(),
        };
        tracing::debug!(
            "Auto-scaled {} values to bucket {} ({:?})",
            values.len(),
            scale.bucket,
            scale.suffix
        );
        scale
    }

    /// Render one value of a batch with the batch's shared suffix.
    ///
    /// `value` is raw; the scale's multiplier is applied here. Values that
    /// reach 1000 or more after scaling are printed without decimals.
    pub fn render_scaled(&self, value: f64, scale: &Scale, unit: &str) -> String {
        let (digits, _) = three_digits(value * scale.multiplier);
        join(&digits, &scale.suffix, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> Codec {
        Codec::builtin().unwrap()
    }

    #[test]
    fn test_auto_scale_milli() {
        let scale = codec().auto_scale(&[1e-3, 2e-3, 1.5e-3]);
        assert_eq!(scale.bucket, -1);
        assert_eq!(scale.suffix, "m");
        assert_eq!(scale.multiplier, 1000.0);
    }

    #[test]
    fn test_auto_scale_zeros_count_as_unity() {
        let scale = codec().auto_scale(&[0.0, 0.0, 0.0]);
        assert_eq!(scale.bucket, 0);
        assert_eq!(scale.suffix, "");
        assert_eq!(scale.multiplier, 1.0);

        // log10 values 0, 6, 6 -> mean 4 -> bucket 1
        let scale = codec().auto_scale(&[0.0, 1e6, -1e6]);
        assert_eq!(scale.suffix, "k");
    }

    #[test]
    fn test_auto_scale_clamps_inclusively() {
        let codec = codec();
        assert_eq!(codec.auto_scale(&[1e30, 1e33]).suffix, "Y");
        assert_eq!(codec.auto_scale(&[1e-30]).suffix, "y");
        assert_eq!(codec.auto_scale(&[1e-30]).bucket, -8);
    }

    #[test]
    fn test_auto_scale_empty_and_nan() {
        let codec = codec();
        assert_eq!(codec.auto_scale(&[]).bucket, 0);
        assert_eq!(codec.auto_scale(&[f64::NAN, 1e3]).bucket, 0);
    }

    #[test]
    fn test_apply_and_render() {
        let codec = codec();
        let values = [1e-3, 2.5e-3, 12e-3];
        let scale = codec.auto_scale(&values);

        let applied = scale.apply(&values);
        assert!((applied[1] - 2.5).abs() < 1e-12);

        let rendered: Vec<String> = values
            .iter()
            .map(|&v| codec.render_scaled(v, &scale, "V"))
            .collect();
        assert_eq!(rendered, vec!["1.00 mV", "2.50 mV", "12.0 mV"]);
        assert_eq!(codec.render_scaled(1.5, &scale, "V"), "1500 mV");
    }
}
