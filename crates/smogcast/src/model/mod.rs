//! Fitted model types.
//!
//! # Key Types
//!
//! - [`LinearModel`] - intercept + weights, evaluates feature vectors
//! - [`ModelBundle`] - the immutable (model, encoders) unit the registry swaps
//! - [`ModelMeta`] / [`TrainReport`] - descriptive metadata and the outward
//!   training summary

mod bundle;
mod linear;
mod meta;

pub use bundle::ModelBundle;
pub use linear::LinearModel;
pub use meta::{ModelMeta, TrainReport};
