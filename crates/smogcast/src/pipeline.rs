//! End-to-end training: raw rows in, publishable bundle out.

use crate::dataset::{build_design_matrix, DatasetError, PollutionRecord};
use crate::model::{ModelBundle, ModelMeta, TrainReport};
use crate::training::{FitError, LeastSquaresTrainer};

/// Union of everything a training run can fail with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Fit(#[from] FitError),
}

/// Run one full training pass: build the design matrix with fresh encoders,
/// fit the model, and assemble the bundle plus its outward report.
///
/// The registry is deliberately not touched here; the caller publishes the
/// bundle on success, which is what keeps a failed training from disturbing
/// the bundle already being served.
///
/// # Errors
///
/// Everything [`build_design_matrix`] and
/// [`LeastSquaresTrainer::fit`](crate::training::LeastSquaresTrainer::fit)
/// raise, unchanged.
pub fn train_model(records: &[PollutionRecord]) -> Result<(ModelBundle, TrainReport), TrainError> {
    let design = build_design_matrix(records)?;
    let model = LeastSquaresTrainer::default().fit(design.features.view(), design.targets.view())?;

    let report = TrainReport {
        sample_count: design.n_samples(),
        cities: design.cities.names().to_vec(),
        states: design.states.names().to_vec(),
    };
    let meta = ModelMeta::new(model.n_features(), design.n_samples());
    let bundle = ModelBundle::from_parts(model, design.cities, design.states, meta);
    Ok((bundle, report))
}
