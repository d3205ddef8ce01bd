//! Ordinary least squares via the SVD pseudo-inverse.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::model::LinearModel;

/// Errors raised by the least-squares fit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Feature row count and target length disagree.
    #[error("feature rows ({rows}) and target length ({targets}) disagree")]
    ShapeMismatch { rows: usize, targets: usize },
    /// A non-finite value reached the fit step.
    #[error("non-finite value at row {row}, column {column} of the design matrix")]
    NonFinite { row: usize, column: usize },
    /// A non-finite target reached the fit step.
    #[error("non-finite target at row {row}")]
    NonFiniteTarget { row: usize },
    /// The decomposition could not produce its factors.
    #[error("singular value decomposition failed: {reason}")]
    Decomposition { reason: &'static str },
}

/// Parameters for [`LeastSquaresTrainer`].
#[derive(Debug, Clone, Default)]
pub struct LeastSquaresParams {
    /// Singular values at or below this threshold are treated as zero when
    /// inverting. `None` scales machine precision by the largest singular
    /// value and the matrix extent, which keeps near-singular systems (a
    /// constant pollutant column, nearly one city per row) stable.
    pub singular_value_cutoff: Option<f64>,
}

/// Ordinary-least-squares trainer with an implicit intercept.
///
/// The design matrix is augmented with a leading column of ones and the
/// coefficient vector solved as `β = pinv(X′) · y`. The pseudo-inverse is
/// the point: when `X′ᵗX′` is singular (fewer samples than parameters, or
/// linearly dependent columns) the solve still returns the minimum-norm
/// least-squares solution instead of failing or emitting NaNs.
#[derive(Debug, Clone, Default)]
pub struct LeastSquaresTrainer {
    params: LeastSquaresParams,
}

impl LeastSquaresTrainer {
    /// Create a trainer with explicit parameters.
    pub fn new(params: LeastSquaresParams) -> Self {
        Self { params }
    }

    /// Fit `targets ≈ intercept + features · weights`.
    ///
    /// `features` has one sample per row; the intercept column is added
    /// internally and must not be part of the input.
    ///
    /// # Errors
    ///
    /// [`FitError::ShapeMismatch`] when dimensions disagree,
    /// [`FitError::NonFinite`]/[`FitError::NonFiniteTarget`] when a
    /// non-finite value reaches the fit, [`FitError::Decomposition`] when
    /// the SVD cannot produce its factors.
    pub fn fit(
        &self,
        features: ArrayView2<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<LinearModel, FitError> {
        let n_rows = features.nrows();
        let n_cols = features.ncols();
        if targets.len() != n_rows {
            return Err(FitError::ShapeMismatch {
                rows: n_rows,
                targets: targets.len(),
            });
        }
        if n_rows == 0 {
            return Err(FitError::Decomposition {
                reason: "empty design matrix",
            });
        }
        for ((row, column), value) in features.indexed_iter() {
            if !value.is_finite() {
                return Err(FitError::NonFinite { row, column });
            }
        }
        for (row, value) in targets.iter().enumerate() {
            if !value.is_finite() {
                return Err(FitError::NonFiniteTarget { row });
            }
        }

        // X′: leading ones column for the intercept, shape (n, n_cols + 1).
        let augmented = DMatrix::from_fn(n_rows, n_cols + 1, |row, column| {
            if column == 0 {
                1.0
            } else {
                features[[row, column - 1]]
            }
        });
        let rhs = DVector::from_iterator(n_rows, targets.iter().copied());

        let svd = augmented.svd(true, true);
        let cutoff = match self.params.singular_value_cutoff {
            Some(value) => value,
            None => {
                let sigma_max = svd
                    .singular_values
                    .iter()
                    .fold(0.0_f64, |acc, &sigma| acc.max(sigma));
                sigma_max * f64::EPSILON * n_rows.max(n_cols + 1) as f64
            }
        };
        let beta = svd
            .solve(&rhs, cutoff)
            .map_err(|reason| FitError::Decomposition { reason })?;

        let intercept = beta[0];
        let weights = Array1::from_iter(beta.iter().skip(1).copied());
        Ok(LinearModel::new(intercept, weights))
    }
}
