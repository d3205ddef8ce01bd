//! Dataset handling: raw rows, categorical encoding, design matrix assembly.
//!
//! This module turns ingested [`PollutionRecord`]s into the numeric design
//! matrix and target vector the trainer consumes, growing one
//! [`CategoryEncoder`] per categorical field along the way.
//!
//! # Feature Layout
//!
//! Every sample, at training and inference time alike, is the fixed 7-tuple
//! `[city_id, state_id, PM10, NO2, SO2, CO, O3]`. The target is PM2.5.

mod builder;
mod encoder;
mod record;

pub use builder::{build_design_matrix, DatasetError, DesignMatrix};
pub use encoder::CategoryEncoder;
pub use record::PollutionRecord;

/// Number of model features per sample.
pub const N_FEATURES: usize = 7;

/// Feature names in design-matrix column order.
pub const FEATURE_NAMES: [&str; N_FEATURES] =
    ["city_id", "state_id", "PM10", "NO2", "SO2", "CO", "O3"];

/// Parse one pollutant value from its raw text.
///
/// Succeeds only if the trimmed text is a complete decimal and the value is
/// finite; `"NaN"`, `"inf"`, and partial numbers like `"12abc"` all fail.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_accepts_plain_numbers() {
        assert_eq!(parse_decimal("12.5"), Some(12.5));
        assert_eq!(parse_decimal(" -3 "), Some(-3.0));
        assert_eq!(parse_decimal("1e-2"), Some(0.01));
    }

    #[test]
    fn parse_decimal_rejects_junk_and_non_finite() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("n/a"), None);
        assert_eq!(parse_decimal("12abc"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }
}
