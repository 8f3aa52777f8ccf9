//! SendGridMailer - SendGrid v3 API でメールを送信する Mailer

use std::time::Duration;

use async_trait::async_trait;
use duebrief_core::domain::DigestError;
use duebrief_core::ports::{DeliveryReceipt, Mailer, OutgoingEmail};
use serde_json::json;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.sendgrid.com";
const SEND_PATH: &str = "/v3/mail/send";
const MESSAGE_ID_HEADER: &str = "x-message-id";

pub struct SendGridMailer {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SendGridMailer {
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DigestError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DigestError::Config(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

/// Request body for one recipient. `text/plain` has to precede `text/html`.
fn payload(email: &OutgoingEmail) -> serde_json::Value {
    json!({
        "personalizations": [{ "to": [{ "email": email.to }] }],
        "from": { "email": email.from },
        "subject": email.subject,
        "content": [
            { "type": "text/plain", "value": email.document.text },
            { "type": "text/html", "value": email.document.html }
        ]
    })
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DigestError> {
        let url = format!("{}{}", self.base_url, SEND_PATH);
        debug!(%url, to = %email.to, "sending digest");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload(email))
            .send()
            .await
            .map_err(|e| DigestError::Delivery(format!("sendgrid request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DigestError::Delivery(format!(
                "sendgrid returned HTTP {status}: {body}"
            )));
        }

        let mut receipt = DeliveryReceipt::new("sendgrid").with_status(status.as_u16());
        if let Some(id) = response
            .headers()
            .get(MESSAGE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            receipt = receipt.with_message_id(id);
        }
        Ok(receipt)
    }
}
