//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports の実装を含めます。
//!
//! # 含まれる実装
//! - **StaticTaskSource**: 固定スナップショットを返す TaskSource
//! - **RecordingMailer**: 送信内容を記録する Mailer
//!
//! # 本番用実装
//! ネットワークを使う実装はバイナリ側（duebrief-cli）に配置します：
//! - TodoistClient: Sync API からスナップショットを取得
//! - SendGridMailer: SendGrid v3 API でメール送信

pub mod recording_mailer;
pub mod static_source;

// 主要な型を再エクスポート
pub use self::recording_mailer::RecordingMailer;
pub use self::static_source::StaticTaskSource;
