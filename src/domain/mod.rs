//! Domain layer containing the decision analysis logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (directions, errors)
//! - `analysis` - Pure domain services for AHP (Saaty and Gaussian weighting,
//!   preference aggregation)

pub mod analysis;
pub mod foundation;
