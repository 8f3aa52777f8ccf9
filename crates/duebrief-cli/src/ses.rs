//! SesMailer - Amazon SES v2 の SendEmail でメールを送信する Mailer
//!
//! 認証情報とリージョンは AWS 標準のチェーン（環境変数・プロファイル・
//! ロール）から読みます。`--aws-region` が指定されればそれを優先します。

use async_trait::async_trait;
use aws_sdk_sesv2::Client;
use aws_sdk_sesv2::config::{BehaviorVersion, Region};
use aws_sdk_sesv2::error::DisplayErrorContext;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use duebrief_core::domain::DigestError;
use duebrief_core::ports::{DeliveryReceipt, Mailer, OutgoingEmail};
use tracing::debug;

const CHARSET: &str = "UTF-8";

pub struct SesMailer {
    client: Client,
}

impl SesMailer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        Self::new(Client::new(&config))
    }
}

fn content(data: &str) -> Result<Content, DigestError> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|e| DigestError::Delivery(format!("ses message: {e}")))
}

/// Simple message with the text part and the HTML part of the document.
fn message(email: &OutgoingEmail) -> Result<Message, DigestError> {
    let body = Body::builder()
        .text(content(&email.document.text)?)
        .html(content(&email.document.html)?)
        .build();

    Ok(Message::builder()
        .subject(content(&email.subject)?)
        .body(body)
        .build())
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DigestError> {
        debug!(to = %email.to, "sending digest through SES");

        let output = self
            .client
            .send_email()
            .from_email_address(&email.from)
            .destination(Destination::builder().to_addresses(&email.to).build())
            .content(EmailContent::builder().simple(message(email)?).build())
            .send()
            .await
            .map_err(|e| {
                DigestError::Delivery(format!("ses send_email: {}", DisplayErrorContext(&e)))
            })?;

        let mut receipt = DeliveryReceipt::new("ses");
        if let Some(id) = output.message_id() {
            receipt = receipt.with_message_id(id);
        }
        Ok(receipt)
    }
}
