//! The atomically replaced (model, encoders) unit.

use crate::dataset::CategoryEncoder;

use super::{LinearModel, ModelMeta};

/// One trained model together with the exact encoders that produced its
/// training matrix.
///
/// The three travel as a single immutable unit: ids looked up at inference
/// time are only meaningful against the tables the active model was trained
/// with, so the registry swaps whole bundles and never the parts. Nothing
/// here is mutated after construction.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    model: LinearModel,
    cities: CategoryEncoder,
    states: CategoryEncoder,
    meta: ModelMeta,
}

impl ModelBundle {
    /// Assemble a bundle from one training run's outputs.
    pub fn from_parts(
        model: LinearModel,
        cities: CategoryEncoder,
        states: CategoryEncoder,
        meta: ModelMeta,
    ) -> Self {
        Self {
            model,
            cities,
            states,
            meta,
        }
    }

    /// The fitted model.
    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// City encoder frozen at training time.
    pub fn cities(&self) -> &CategoryEncoder {
        &self.cities
    }

    /// State encoder frozen at training time.
    pub fn states(&self) -> &CategoryEncoder {
        &self.states
    }

    /// Fit dimensions.
    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }
}
