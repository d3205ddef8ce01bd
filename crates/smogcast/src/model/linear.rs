//! The fitted linear predictor.

use ndarray::{Array1, ArrayView2};

/// Fitted linear predictor: an intercept plus one weight per feature,
/// aligned 1:1 with the feature-vector layout used at training time.
///
/// Immutable once constructed; a retrain produces a new value rather than
/// mutating this one.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    intercept: f64,
    weights: Array1<f64>,
}

impl LinearModel {
    /// Create a model from its fitted coefficients.
    pub fn new(intercept: f64, weights: Array1<f64>) -> Self {
        Self { intercept, weights }
    }

    /// The intercept term.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The feature weights, in feature-vector order.
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// Number of features this model was fitted on.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Evaluate one feature vector: `intercept + Σ weight[i] · feature[i]`.
    pub fn predict_row(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(
            features.len(),
            self.weights.len(),
            "feature vector length does not match the fitted layout"
        );
        let mut sum = self.intercept;
        for (weight, value) in self.weights.iter().zip(features) {
            sum += weight * value;
        }
        sum
    }

    /// Evaluate a batch of feature vectors, one per row.
    pub fn predict_batch(&self, features: ArrayView2<'_, f64>) -> Array1<f64> {
        features.dot(&self.weights) + self.intercept
    }
}
