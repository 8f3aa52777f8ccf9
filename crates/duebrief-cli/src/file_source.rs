//! FileSnapshotSource - JSON ファイルからスナップショットを読む TaskSource

use std::path::PathBuf;

use async_trait::async_trait;
use duebrief_core::domain::{DigestError, Snapshot};
use duebrief_core::ports::TaskSource;

#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TaskSource for FileSnapshotSource {
    async fn fetch_snapshot(&self) -> Result<Snapshot, DigestError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DigestError::Source(format!("{}: {e}", self.path.display())))?;
        Snapshot::from_slice(&bytes)
    }
}
