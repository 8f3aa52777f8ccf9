//! TodoistClient - Sync API からスナップショットを取得する TaskSource
//!
//! 一回の実行で一度だけ full sync（sync_token = "*"）を行います。
//! 完了済み・削除済みのアイテムはコアに渡す前にここで落とします。

use std::time::Duration;

use async_trait::async_trait;
use duebrief_core::domain::{DigestError, Project, Snapshot, Task};
use duebrief_core::ports::TaskSource;
use serde::{Deserialize, Deserializer};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com";
const SYNC_PATH: &str = "/sync/v9/sync";
const RESOURCE_TYPES: &str = r#"["items","projects"]"#;

pub struct TodoistClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct SyncResponse {
    #[serde(default)]
    items: Vec<SyncItem>,
    #[serde(default)]
    projects: Vec<SyncProject>,
}

#[derive(Debug, Deserialize)]
struct SyncItem {
    #[serde(flatten)]
    task: Task,
    #[serde(default, deserialize_with = "flag")]
    checked: bool,
    #[serde(default, deserialize_with = "flag")]
    is_deleted: bool,
}

#[derive(Debug, Deserialize)]
struct SyncProject {
    #[serde(flatten)]
    project: Project,
    #[serde(default, deserialize_with = "flag")]
    is_deleted: bool,
}

/// Older sync payloads send 0/1 instead of booleans; anything else is false.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_u64() == Some(1),
        _ => false,
    })
}

impl TodoistClient {
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DigestError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("duebrief/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DigestError::Config(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl TaskSource for TodoistClient {
    async fn fetch_snapshot(&self) -> Result<Snapshot, DigestError> {
        let url = format!("{}{}", self.base_url, SYNC_PATH);
        debug!(%url, "requesting full sync");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .form(&[("sync_token", "*"), ("resource_types", RESOURCE_TYPES)])
            .send()
            .await
            .map_err(|e| DigestError::Source(format!("sync request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DigestError::Source(format!("sync returned HTTP {status}: {body}")));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DigestError::Source(format!("sync response body: {e}")))?;
        if value.is_null() {
            return Err(DigestError::InvalidInput("sync returned no snapshot".to_string()));
        }
        let sync: SyncResponse = serde_json::from_value(value)
            .map_err(|e| DigestError::InvalidInput(format!("sync payload: {e}")))?;

        let tasks = sync
            .items
            .into_iter()
            .filter(|item| !item.checked && !item.is_deleted)
            .map(|item| item.task)
            .collect::<Vec<_>>();
        let projects = sync
            .projects
            .into_iter()
            .filter(|p| !p.is_deleted)
            .map(|p| p.project)
            .collect::<Vec<_>>();

        debug!(tasks = tasks.len(), projects = projects.len(), "sync decoded");
        Ok(Snapshot::new(tasks, projects))
    }
}
