//! Design matrix assembly.

use ndarray::{Array1, Array2};

use super::{parse_decimal, CategoryEncoder, PollutionRecord, N_FEATURES};

/// Errors raised while assembling the design matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// The input contained no rows at all.
    #[error("dataset contains no rows")]
    Empty,
    /// Every row was dropped by the numeric filter.
    #[error("no row has all six pollutant fields as finite decimals")]
    NoValidRows,
}

/// The numeric view of one training run: features, targets, and the
/// encoders grown while scanning the rows.
#[derive(Debug, Clone)]
pub struct DesignMatrix {
    /// Feature matrix, shape `(n_samples, N_FEATURES)`.
    pub features: Array2<f64>,
    /// PM2.5 targets, length `n_samples`.
    pub targets: Array1<f64>,
    /// City encoder as grown during the scan.
    pub cities: CategoryEncoder,
    /// State encoder as grown during the scan.
    pub states: CategoryEncoder,
}

impl DesignMatrix {
    /// Number of samples that survived filtering.
    pub fn n_samples(&self) -> usize {
        self.targets.len()
    }
}

/// Convert raw records into `(X, Y)` plus the encoders, in file order.
///
/// Per row: City and State are encoded first (growing the encoders), then
/// the six pollutant fields are parsed. If any parse fails the row is
/// dropped from `(X, Y)`, but the encoding side effect is deliberately not
/// rolled back: ids can be consumed by rows that never reach the matrix.
/// Downstream consumers (the trainer, the report) see exactly the encoder
/// state this scan produced.
///
/// # Errors
///
/// [`DatasetError::Empty`] for an empty input sequence,
/// [`DatasetError::NoValidRows`] when filtering drops every row.
pub fn build_design_matrix(records: &[PollutionRecord]) -> Result<DesignMatrix, DatasetError> {
    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut cities = CategoryEncoder::new();
    let mut states = CategoryEncoder::new();
    let mut rows: Vec<[f64; N_FEATURES]> = Vec::with_capacity(records.len());
    let mut targets: Vec<f64> = Vec::with_capacity(records.len());

    for record in records {
        // Encoding happens before numeric validation; order matters.
        let city_id = cities.lookup_or_insert(&record.city);
        let state_id = states.lookup_or_insert(&record.state);

        let parsed = [
            parse_decimal(&record.pm2_5),
            parse_decimal(&record.pm10),
            parse_decimal(&record.no2),
            parse_decimal(&record.so2),
            parse_decimal(&record.co),
            parse_decimal(&record.o3),
        ];
        let [Some(pm2_5), Some(pm10), Some(no2), Some(so2), Some(co), Some(o3)] = parsed else {
            continue;
        };

        rows.push([city_id as f64, state_id as f64, pm10, no2, so2, co, o3]);
        targets.push(pm2_5);
    }

    if rows.is_empty() {
        return Err(DatasetError::NoValidRows);
    }

    let mut features = Array2::zeros((rows.len(), N_FEATURES));
    for (i, row) in rows.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            features[[i, j]] = *value;
        }
    }

    Ok(DesignMatrix {
        features,
        targets: Array1::from_vec(targets),
        cities,
        states,
    })
}
