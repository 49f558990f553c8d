//! Quantile estimators

pub mod linear;
pub mod weighted;

pub use linear::LinearQuantile;
pub use weighted::{WeightedQuantile, Weights};
