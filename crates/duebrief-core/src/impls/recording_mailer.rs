//! RecordingMailer - 送信内容を記録するだけの Mailer
//!
//! # 学習ポイント
//! - tokio::sync::Mutex による async 文脈での排他制御
//! - 失敗を注入してオーケストレーターのエラーパスを確認する

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::DigestError;
use crate::ports::{DeliveryReceipt, Mailer, OutgoingEmail};

/// RecordingMailer は送信されたメールを outbox に溜める
#[derive(Debug, Default)]
pub struct RecordingMailer {
    outbox: Mutex<Vec<OutgoingEmail>>,
    fail_with: Option<String>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に送信失敗を返す Mailer
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outbox: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    /// これまでに送信されたメールの複製
    pub async fn sent(&self) -> Vec<OutgoingEmail> {
        self.outbox.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DigestError> {
        if let Some(reason) = &self.fail_with {
            return Err(DigestError::Delivery(reason.clone()));
        }

        let mut outbox = self.outbox.lock().await;
        outbox.push(email.clone());
        Ok(DeliveryReceipt::new("memory").with_message_id(format!("mem-{}", outbox.len())))
    }
}
