//! Mailer port - メール送信の抽象化
//!
//! 宛先・送信元・件名・本文を受け取り、一度だけ送信します。
//! 送信側のリトライはここでは行いません。

use async_trait::async_trait;
use serde::Serialize;

use crate::digest::Document;
use crate::domain::DigestError;

/// A fully composed email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub document: Document,
}

/// What the transport reported back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    pub provider: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl DeliveryReceipt {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            message_id: None,
            status: None,
        }
    }

    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Mailer はメールを外部トランスポートに渡す
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DigestError>;
}
