//! Model fitting.
//!
//! One trainer lives here: [`LeastSquaresTrainer`], an ordinary-least-squares
//! fit with an implicit intercept, solved through the SVD pseudo-inverse so
//! rank-deficient design matrices still produce a defined, minimum-norm
//! solution.

mod least_squares;

pub use least_squares::{FitError, LeastSquaresParams, LeastSquaresTrainer};
