//! ConsoleMailer - 送信せずに標準出力へ書き出す（--dry-run 用）

use async_trait::async_trait;
use duebrief_core::domain::DigestError;
use duebrief_core::ports::{DeliveryReceipt, Mailer, OutgoingEmail};

#[derive(Debug, Default)]
pub struct ConsoleMailer;

pub fn format_email(email: &OutgoingEmail) -> String {
    format!(
        "To: {}\nFrom: {}\nSubject: {}\n\n{}",
        email.to, email.from, email.subject, email.document.text
    )
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DigestError> {
        println!("{}", format_email(email));
        Ok(DeliveryReceipt::new("console"))
    }
}
