//! smogcast: a PM2.5 regression pipeline.
//!
//! Turns raw pollution rows into an ordinary-least-squares model of PM2.5
//! over location and co-pollutants, then serves point predictions against
//! an atomically swapped model bundle.
//!
//! # Key Types
//!
//! - [`PollutionRecord`] / [`build_design_matrix`] - raw rows → design matrix
//! - [`LeastSquaresTrainer`] - SVD-backed least-squares fit
//! - [`ModelBundle`] / [`ModelRegistry`] - the active (model, tables) unit
//! - [`predict`] / [`PredictQuery`] - query evaluation
//!
//! # Training
//!
//! [`train_model`] runs the whole pass and leaves publishing to the caller:
//!
//! ```
//! use smogcast::{train_model, ModelRegistry, PollutionRecord};
//!
//! let rows = vec![
//!     PollutionRecord::new("StateX", "City1", "10", "20", "5", "2", "0.3", "15"),
//!     PollutionRecord::new("StateX", "City2", "12", "22", "6", "2", "0.4", "16"),
//! ];
//! let (bundle, report) = train_model(&rows)?;
//! assert_eq!(report.sample_count, 2);
//!
//! let registry = ModelRegistry::new();
//! registry.publish(bundle);
//! assert!(registry.is_trained());
//! # Ok::<(), smogcast::TrainError>(())
//! ```

pub mod dataset;
pub mod inference;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Dataset types (for preparing training data)
pub use dataset::{
    build_design_matrix, CategoryEncoder, DatasetError, DesignMatrix, PollutionRecord,
    FEATURE_NAMES, N_FEATURES,
};

// The prediction path
pub use inference::{evaluate, predict, PredictError, PredictQuery, RawNumber};

// Model types and the registry they live in
pub use model::{LinearModel, ModelBundle, ModelMeta, TrainReport};
pub use registry::ModelRegistry;

// Training
pub use pipeline::{train_model, TrainError};
pub use training::{FitError, LeastSquaresParams, LeastSquaresTrainer};
