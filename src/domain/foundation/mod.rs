//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the AHP domain.

mod direction;
mod errors;

pub use direction::Direction;
pub use errors::{AnalysisError, ErrorCode};
