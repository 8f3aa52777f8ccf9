//! Summary model: the display-ready projection of a snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use super::{MalformedDueDate, Priority};

/// Resolved view of one task with a due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskInfo {
    pub content: String,
    pub project: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

/// Tasks split into the two buckets that get rendered.
///
/// Order inside each bucket is the snapshot's task order. A task is in at
/// most one bucket; tasks outside the window are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BucketedSummary {
    pub today: Vec<TaskInfo>,
    pub upcoming: Vec<TaskInfo>,

    /// Tasks skipped because their due date could not be read.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<MalformedDueDate>,
}

impl BucketedSummary {
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.upcoming.is_empty()
    }
}
