//! Model metadata and the outward training summary.

use serde::{Deserialize, Serialize};

/// Descriptive metadata about a fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelMeta {
    /// Number of features the model was fitted on.
    pub n_features: usize,
    /// Number of samples that reached the fit after filtering.
    pub n_samples: usize,
}

impl ModelMeta {
    /// Create metadata from the fit dimensions.
    pub fn new(n_features: usize, n_samples: usize) -> Self {
        Self {
            n_features,
            n_samples,
        }
    }
}

/// Outward-facing summary of one training run.
///
/// City and state names are listed in id order, so positions double as the
/// encoded ids the model was trained with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainReport {
    /// Samples used by the fit (rows surviving the numeric filter).
    pub sample_count: usize,
    /// Distinct city names in id order.
    pub cities: Vec<String>,
    /// Distinct state names in id order.
    pub states: Vec<String>,
}
