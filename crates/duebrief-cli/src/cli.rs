//! Command-line / environment configuration.
//!
//! Every option can come from the environment so the binary can run from a
//! scheduler or a serverless wrapper without arguments.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use duebrief_core::app::{DEFAULT_SUBJECT_PREFIX, DigestConfig};
use duebrief_core::digest::LookaheadWindow;
use duebrief_core::ports::{Mailer, TaskSource};

use crate::console::ConsoleMailer;
use crate::file_source::FileSnapshotSource;
use crate::sendgrid::{self, SendGridMailer};
use crate::ses::SesMailer;
use crate::todoist::{self, TodoistClient};

/// Email transport used when not in dry-run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MailerKind {
    Sendgrid,
    Ses,
}

#[derive(Debug, Parser)]
#[command(
    name = "duebrief",
    version,
    about = "Email a digest of Todoist tasks due today and in the next few days"
)]
pub struct Cli {
    /// Todoist API token.
    #[arg(long, env = "TODOIST_API_KEY", hide_env_values = true)]
    pub todoist_api_key: Option<String>,

    /// Read the snapshot from a JSON file instead of calling Todoist.
    #[arg(long, env = "DUEBRIEF_SNAPSHOT_FILE")]
    pub snapshot_file: Option<PathBuf>,

    /// Email transport.
    #[arg(long, env = "DUEBRIEF_MAILER", value_enum, default_value_t = MailerKind::Sendgrid)]
    pub mailer: MailerKind,

    /// AWS region for SES. Falls back to the AWS config chain.
    #[arg(long, env = "AWS_REGION")]
    pub aws_region: Option<String>,

    /// SendGrid API key (only for --mailer sendgrid).
    #[arg(long, env = "SENDGRID_API_KEY", hide_env_values = true)]
    pub sendgrid_api_key: Option<String>,

    /// Address the digest is sent to.
    #[arg(long, env = "RECIPIENT_EMAIL")]
    pub recipient: String,

    /// Address the digest is sent from.
    #[arg(long, env = "SENDER_EMAIL")]
    pub sender: String,

    /// Days after today that count as upcoming (inclusive).
    #[arg(long, env = "DUEBRIEF_WINDOW_DAYS", default_value_t = LookaheadWindow::DEFAULT_DAYS)]
    pub window_days: u32,

    /// Recipient's offset from UTC in minutes (e.g. -300 for UTC-05:00).
    #[arg(
        long,
        env = "DUEBRIEF_UTC_OFFSET_MINUTES",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub utc_offset_minutes: i32,

    #[arg(long, env = "DUEBRIEF_SUBJECT_PREFIX", default_value = DEFAULT_SUBJECT_PREFIX)]
    pub subject_prefix: String,

    /// Print the email instead of sending it.
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, env = "TODOIST_BASE_URL", default_value = todoist::DEFAULT_BASE_URL, hide = true)]
    pub todoist_base_url: String,

    #[arg(long, env = "SENDGRID_BASE_URL", default_value = sendgrid::DEFAULT_BASE_URL, hide = true)]
    pub sendgrid_base_url: String,
}

impl Cli {
    pub fn digest_config(&self) -> DigestConfig {
        DigestConfig::new(&self.recipient, &self.sender)
            .with_window(LookaheadWindow::days(self.window_days))
            .with_utc_offset_minutes(self.utc_offset_minutes)
            .with_subject_prefix(&self.subject_prefix)
    }

    pub fn task_source(&self) -> Result<Arc<dyn TaskSource>> {
        if let Some(path) = &self.snapshot_file {
            return Ok(Arc::new(FileSnapshotSource::new(path)));
        }
        let Some(token) = &self.todoist_api_key else {
            bail!("either TODOIST_API_KEY or --snapshot-file is required");
        };
        let client = TodoistClient::with_base_url(token, &self.todoist_base_url)
            .context("building Todoist client")?;
        Ok(Arc::new(client))
    }

    pub async fn mailer(&self) -> Result<Arc<dyn Mailer>> {
        if self.dry_run {
            return Ok(Arc::new(ConsoleMailer));
        }
        match self.mailer {
            MailerKind::Ses => Ok(Arc::new(SesMailer::from_env(self.aws_region.clone()).await)),
            MailerKind::Sendgrid => {
                let Some(key) = &self.sendgrid_api_key else {
                    bail!("SENDGRID_API_KEY is required unless --dry-run or --mailer ses is given");
                };
                let mailer = SendGridMailer::with_base_url(key, &self.sendgrid_base_url)
                    .context("building SendGrid client")?;
                Ok(Arc::new(mailer))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["duebrief", "--recipient", "me@example.com", "--sender", "bot@example.com"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("parses")
    }

    #[tokio::test]
    async fn defaults_build_the_classic_config() {
        let cli = parse(&["--todoist-api-key", "t", "--sendgrid-api-key", "s"]);
        let config = cli.digest_config();
        assert_eq!(config.window.as_days(), 4);
        assert_eq!(config.utc_offset_minutes, 0);
        assert_eq!(config.subject_prefix, DEFAULT_SUBJECT_PREFIX);
        assert_eq!(cli.mailer, MailerKind::Sendgrid);
        assert!(cli.task_source().is_ok());
        assert!(cli.mailer().await.is_ok());
    }

    #[test]
    fn negative_offsets_and_custom_window_parse() {
        let cli = parse(&["--utc-offset-minutes", "-300", "--window-days", "7"]);
        let config = cli.digest_config();
        assert_eq!(config.utc_offset_minutes, -300);
        assert_eq!(config.window.as_days(), 7);
    }

    #[tokio::test]
    async fn dry_run_needs_no_mail_key() {
        let cli = parse(&["--dry-run", "--snapshot-file", "snap.json"]);
        assert!(cli.mailer().await.is_ok());
        assert!(cli.task_source().is_ok());
    }

    #[tokio::test]
    async fn missing_keys_are_reported() {
        let cli = Cli {
            todoist_api_key: None,
            snapshot_file: None,
            sendgrid_api_key: None,
            mailer: MailerKind::Sendgrid,
            ..parse(&[])
        };
        assert!(cli.task_source().err().expect("task source without a key").to_string().contains("TODOIST_API_KEY"));
        let err = match cli.mailer().await {
            Ok(_) => panic!("mailer without a key"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("SENDGRID_API_KEY"));
    }

    #[tokio::test]
    async fn ses_needs_no_sendgrid_key() {
        let cli = Cli {
            sendgrid_api_key: None,
            ..parse(&["--mailer", "ses", "--aws-region", "eu-west-1"])
        };
        assert_eq!(cli.mailer, MailerKind::Ses);
        assert_eq!(cli.aws_region.as_deref(), Some("eu-west-1"));
        assert!(cli.mailer().await.is_ok());
    }
}
