//! ReminderOrchestrator - スナップショット取得から送信までの一回分の実行
//!
//! # フロー
//! 1. IdGenerator で RunId を発行（tracing span に載せる）
//! 2. Clock から現在時刻を取得し、設定のタイムゾーンで「今日」を決める
//! 3. TaskSource からスナップショットを取得
//! 4. summarize → render（純粋関数）
//! 5. OutgoingEmail を組み立てて Mailer に一度だけ渡す
//!
//! リトライはここでは行いません（各アダプタの責務）。

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;
use tracing::{Instrument, debug, info, info_span, warn};

use super::config::DigestConfig;
use crate::digest::{render, summarize};
use crate::domain::due::local_date;
use crate::domain::{BucketedSummary, DigestError, RunId};
use crate::ports::{
    Clock, DeliveryReceipt, IdGenerator, Mailer, OutgoingEmail, TaskSource, UlidGenerator,
};

/// Everything computed for a run before anything is sent.
#[derive(Debug, Clone)]
pub struct PreparedDigest {
    pub run_id: RunId,
    pub today: NaiveDate,
    pub summary: BucketedSummary,
    pub email: OutgoingEmail,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub today: NaiveDate,
    pub due_today: usize,
    pub upcoming: usize,
    pub rejected: usize,
    pub receipt: DeliveryReceipt,
}

pub struct ReminderOrchestrator {
    source: Arc<dyn TaskSource>,
    mailer: Arc<dyn Mailer>,
    clock: Arc<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    config: DigestConfig,
    tz: FixedOffset,
}

impl ReminderOrchestrator {
    /// Prefer [`super::OrchestratorBuilder`], which validates first.
    pub fn new(
        source: Arc<dyn TaskSource>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        config: DigestConfig,
    ) -> Result<Self, DigestError> {
        let tz = config.timezone()?;
        Ok(Self {
            source,
            mailer,
            ids: Box::new(UlidGenerator::new(clock.clone())),
            clock,
            config,
            tz,
        })
    }

    /// Fetch, summarize and render without sending.
    pub async fn prepare(&self) -> Result<PreparedDigest, DigestError> {
        let run_id = self.ids.generate_run_id();
        let span = info_span!("digest_run", %run_id);
        self.compose(run_id).instrument(span).await
    }

    /// Prepare the digest and hand it to the mailer once.
    pub async fn run(&self) -> Result<RunReport, DigestError> {
        let prepared = self.prepare().await?;
        let span = info_span!("digest_send", run_id = %prepared.run_id);

        async move {
            let receipt = self.mailer.send(&prepared.email).await.inspect_err(|e| {
                warn!(error = %e, "email delivery failed");
            })?;
            info!(
                provider = %receipt.provider,
                message_id = receipt.message_id.as_deref().unwrap_or("-"),
                "digest sent"
            );

            Ok(RunReport {
                run_id: prepared.run_id,
                today: prepared.today,
                due_today: prepared.summary.today.len(),
                upcoming: prepared.summary.upcoming.len(),
                rejected: prepared.summary.rejected.len(),
                receipt,
            })
        }
        .instrument(span)
        .await
    }

    async fn compose(&self, run_id: RunId) -> Result<PreparedDigest, DigestError> {
        let today = local_date(self.clock.now(), self.tz);
        debug!(%today, window_days = self.config.window.as_days(), "fetching snapshot");

        let snapshot = self.source.fetch_snapshot().await?;
        let summary = summarize(&snapshot, today, self.config.window, self.tz);

        for rejected in &summary.rejected {
            warn!(task_id = %rejected.task_id, raw = %rejected.raw, "skipping task with unparseable due date");
        }
        info!(
            tasks = snapshot.tasks.len(),
            projects = snapshot.projects.len(),
            due_today = summary.today.len(),
            upcoming = summary.upcoming.len(),
            rejected = summary.rejected.len(),
            "snapshot summarized"
        );

        let label = today.format("%Y-%m-%d").to_string();
        let document = render(&summary, &label, self.config.window);
        let email = OutgoingEmail {
            to: self.config.recipient.clone(),
            from: self.config.sender.clone(),
            subject: self.config.subject_for(today),
            document,
        };

        Ok(PreparedDigest {
            run_id,
            today,
            summary,
            email,
        })
    }
}
