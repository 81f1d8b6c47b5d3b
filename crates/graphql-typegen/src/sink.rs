use std::{io, path::PathBuf};

use async_trait::async_trait;

/// Destination for generated artifacts, addressed by file name.
///
/// Persisting the same name twice replaces the previous content, so a rerun
/// of the generator overwrites the artifacts of the run before it.
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    async fn persist(&self, name: &str, content: &str) -> io::Result<()>;
}

/// Sink writing every artifact as a file in a single output directory.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates the output directory if it does not exist yet and returns a
    /// sink writing into it.
    pub async fn create(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        Ok(Self { root })
    }
}

#[async_trait]
impl ArtifactSink for DirectorySink {
    async fn persist(&self, name: &str, content: &str) -> io::Result<()> {
        tokio::fs::write(self.root.join(name), content).await
    }
}
