//! ProblemSource port for loading decision problems by name.

use async_trait::async_trait;
use thiserror::Error;

use crate::application::handlers::ProblemDefinition;

/// Errors that can occur while loading a problem definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemSourceError {
    /// No problem with that name
    #[error("Problem not found: {0}")]
    NotFound(String),

    /// Underlying read failure
    #[error("IO error: {0}")]
    Io(String),

    /// Name does not map to a known format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Content is not a valid problem definition
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Source of decision problems (files, fixtures, remote stores).
#[async_trait]
pub trait ProblemSource: Send + Sync {
    /// Load and parse the problem identified by `name`.
    async fn load(&self, name: &str) -> Result<ProblemDefinition, ProblemSourceError>;
}
