//! StaticTaskSource - 固定スナップショットを返す TaskSource
//!
//! テストや、ファイルから読み込んだスナップショットでの実行に使います。

use async_trait::async_trait;

use crate::domain::{DigestError, Snapshot};
use crate::ports::TaskSource;

/// StaticTaskSource は保持しているスナップショットの複製を返す
///
/// `None` で作ると「スナップショットが存在しない」状態を表し、
/// 取得時に InvalidInput を返します。
#[derive(Debug, Clone, Default)]
pub struct StaticTaskSource {
    snapshot: Option<Snapshot>,
}

impl StaticTaskSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn absent() -> Self {
        Self { snapshot: None }
    }
}

#[async_trait]
impl TaskSource for StaticTaskSource {
    async fn fetch_snapshot(&self) -> Result<Snapshot, DigestError> {
        self.snapshot
            .clone()
            .ok_or_else(|| DigestError::InvalidInput("snapshot is absent".to_string()))
    }
}
