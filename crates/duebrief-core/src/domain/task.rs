use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use super::lenient;
use super::{ProjectId, TaskId};

/// Todoist-style priority ordinal (1 = normal … 4 = urgent).
///
/// Decoding never fails: a missing, non-numeric, fractional or out-of-range
/// value falls back to the default ordinal so one odd task cannot break a
/// whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    pub const NORMAL: Priority = Priority(1);
    pub const URGENT: Priority = Priority(4);

    /// Clamps into 1..=4.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::NORMAL.0, Self::URGENT.0))
    }

    /// Exact ordinal from a decoded number. `2.0` is accepted, `2.5` and `7` are not.
    pub fn from_ordinal(value: f64) -> Option<Self> {
        let in_range = (f64::from(Self::NORMAL.0)..=f64::from(Self::URGENT.0)).contains(&value);
        (in_range && value.fract() == 0.0).then(|| Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let parsed = match &value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(parsed.and_then(Priority::from_ordinal).unwrap_or_default())
    }
}

/// Raw due information as delivered by the task service.
///
/// `date` is kept as text; turning it into a calendar date is the
/// summarizer's job because that step can fail per task. Decoding accepts
/// any shape: an object without `date`, or a `date` that is not a string,
/// still yields a `DueInfo` whose text the summarizer will reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueInfo {
    pub date: String,
}

impl DueInfo {
    pub fn on(date: impl Into<String>) -> Self {
        Self { date: date.into() }
    }
}

impl<'de> Deserialize<'de> for DueInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let date = match Value::deserialize(deserializer)? {
            Value::Object(fields) => fields.get("date").map(lenient::text_of).unwrap_or_default(),
            other => lenient::text_of(&other),
        };
        Ok(Self::on(date))
    }
}

/// A task as read from the snapshot.
///
/// Every field decodes leniently. A task with no readable project id gets
/// `project_id: None` and is shown under the fallback project name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "lenient::id_or_empty")]
    pub id: TaskId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub content: String,

    #[serde(default)]
    pub due: Option<DueInfo>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(
        default,
        deserialize_with = "lenient::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_id: Option<ProjectId>,
}

impl Task {
    /// Convenience constructor for tests and in-memory snapshots.
    pub fn new(
        id: impl Into<TaskId>,
        content: impl Into<String>,
        project_id: impl Into<ProjectId>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            due: None,
            priority: Priority::default(),
            project_id: Some(project_id.into()),
        }
    }

    pub fn with_due(mut self, date: impl Into<String>) -> Self {
        self.due = Some(DueInfo::on(date));
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Priority::new(priority);
        self
    }
}
