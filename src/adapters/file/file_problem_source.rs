//! Filesystem adapter for JSON and YAML problem files

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::application::handlers::ProblemDefinition;
use crate::ports::{ProblemSource, ProblemSourceError};

/// Serialization format of a problem file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProblemFormat {
    Json,
    Yaml,
}

impl ProblemFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Filesystem-based problem source
///
/// Resolves names relative to a base directory. Absolute names are used
/// as-is.
pub struct FileProblemSource {
    base_dir: PathBuf,
}

impl FileProblemSource {
    /// Create new source rooted at `base_dir`
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn parse(format: ProblemFormat, content: &str) -> Result<ProblemDefinition, ProblemSourceError> {
        match format {
            ProblemFormat::Json => serde_json::from_str(content)
                .map_err(|e| ProblemSourceError::Parse(e.to_string())),
            ProblemFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ProblemSourceError::Parse(e.to_string())),
        }
    }
}

#[async_trait]
impl ProblemSource for FileProblemSource {
    async fn load(&self, name: &str) -> Result<ProblemDefinition, ProblemSourceError> {
        let path = self.resolve(name);

        let format = ProblemFormat::from_path(&path)
            .ok_or_else(|| ProblemSourceError::UnsupportedFormat(path.display().to_string()))?;

        let content = fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProblemSourceError::NotFound(path.display().to_string())
            } else {
                ProblemSourceError::Io(format!("Failed to read {}: {}", path.display(), e))
            }
        })?;

        debug!(path = %path.display(), ?format, "Loaded problem file");
        Self::parse(format, &content)
    }
}
