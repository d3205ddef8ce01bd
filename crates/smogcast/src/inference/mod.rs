//! Query evaluation against the active model bundle.

mod predict;

pub use predict::{evaluate, predict, PredictError, PredictQuery, RawNumber};
