//! TaskSource port - タスク管理サービスからスナップショットを取得
//!
//! 同期プロトコル・認証・リトライはすべて実装側の責務です。
//! コアは「一回呼んでスナップショットを受け取る」ことしか知りません。

use async_trait::async_trait;

use crate::domain::{DigestError, Snapshot};

/// TaskSource は一回の実行につき一度だけ呼ばれる
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetch the tasks and projects valid right now.
    ///
    /// Failures are reported as `DigestError::Source`; an absent or
    /// undecodable payload as `DigestError::InvalidInput`.
    async fn fetch_snapshot(&self) -> Result<Snapshot, DigestError>;
}
