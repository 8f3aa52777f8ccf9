//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部システム（タスク管理 API, メール送信, 時計）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - コア（digest）は純粋関数のみ、I/O はすべてポート越し
//! - ポートは `Arc<dyn ...>` で保持できるよう object-safe に保つ

pub mod clock;
pub mod id_generator;
pub mod mailer;
pub mod task_source;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::mailer::{DeliveryReceipt, Mailer, OutgoingEmail};
pub use self::task_source::TaskSource;
