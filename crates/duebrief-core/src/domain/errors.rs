//! Errors - エラー型と分類

use serde::Serialize;
use thiserror::Error;

use super::TaskId;

/// ErrorKind は実行エラーの運用分類
///
/// - Permanent: 入力や設定の誤り（再実行しても直らない）
/// - Infrastructure: 外部サービス（タスク API / メール送信）の障害
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Permanent,
    Infrastructure,
}

/// Errors that abort a digest run.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("task source failed: {0}")]
    Source(String),

    #[error("email delivery failed: {0}")]
    Delivery(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DigestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DigestError::InvalidInput(_) | DigestError::Config(_) => ErrorKind::Permanent,
            DigestError::Source(_) | DigestError::Delivery(_) => ErrorKind::Infrastructure,
        }
    }
}

/// A task whose due date could not be parsed.
///
/// This never aborts a run; the summarizer collects these so the caller can
/// report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{task_id}: unparseable due date {raw:?}")]
pub struct MalformedDueDate {
    pub task_id: TaskId,
    pub raw: String,
}
