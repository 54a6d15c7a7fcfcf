//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProblemSource` - Loads decision problems from storage

mod problem_source;

pub use problem_source::{ProblemSource, ProblemSourceError};
