//! App - アプリケーション層
//!
//! このモジュールは、ports と digest を組み合わせて一回分の実行を組み立てます。
//!
//! # 主要コンポーネント
//! - **DigestConfig**: 宛先・送信元・ウィンドウ・タイムゾーンなどの明示的な設定
//! - **OrchestratorBuilder**: ワイヤリングと起動時検証
//! - **ReminderOrchestrator**: 取得 → 要約 → 描画 → 送信

pub mod builder;
pub mod config;
pub mod orchestrator;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, OrchestratorBuilder};
pub use self::config::{DEFAULT_SUBJECT_PREFIX, DigestConfig};
pub use self::orchestrator::{PreparedDigest, ReminderOrchestrator, RunReport};
