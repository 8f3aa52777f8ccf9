//! OrchestratorBuilder - ポートと設定のワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - 開発体験の改善（明確なエラーメッセージ）

use std::sync::Arc;

use super::config::DigestConfig;
use super::orchestrator::ReminderOrchestrator;
use crate::domain::DigestError;
use crate::ports::{Clock, Mailer, SystemClock, TaskSource};

/// OrchestratorBuilder は ReminderOrchestrator を構築
///
/// # 使用例
/// ```ignore
/// let orchestrator = OrchestratorBuilder::new()
///     .source(Arc::new(todoist))
///     .mailer(Arc::new(sendgrid))
///     .config(DigestConfig::new("me@example.com", "bot@example.com"))
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - build() 時に必須ポート（source, mailer）と設定の有無をチェック
/// - 設定の中身（宛先、タイムゾーン）もここで検証する
/// - clock は省略可能（SystemClock）
#[derive(Default)]
pub struct OrchestratorBuilder {
    source: Option<Arc<dyn TaskSource>>,
    mailer: Option<Arc<dyn Mailer>>,
    clock: Option<Arc<dyn Clock>>,
    config: Option<DigestConfig>,
}

/// BuildError はオーケストレーター構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing components: {0:?}. These must be set before build().")]
    MissingComponents(Vec<&'static str>),

    #[error(transparent)]
    InvalidConfig(#[from] DigestError),
}

impl OrchestratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: Arc<dyn TaskSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn config(mut self, config: DigestConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// 検証してから ReminderOrchestrator を生成
    pub fn build(self) -> Result<ReminderOrchestrator, BuildError> {
        let mut missing = Vec::new();
        if self.source.is_none() {
            missing.push("source");
        }
        if self.mailer.is_none() {
            missing.push("mailer");
        }
        if self.config.is_none() {
            missing.push("config");
        }

        let (Some(source), Some(mailer), Some(config)) = (self.source, self.mailer, self.config)
        else {
            return Err(BuildError::MissingComponents(missing));
        };

        config.validate()?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        ReminderOrchestrator::new(source, mailer, clock, config).map_err(BuildError::from)
    }
}
