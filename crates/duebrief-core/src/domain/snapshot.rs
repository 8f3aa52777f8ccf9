//! Snapshot: tasks + projects as of one synchronization point.

use serde::{Deserialize, Serialize};

use super::{DigestError, Project, Task};

/// The complete read-only input of one run.
///
/// `items` is accepted as an alias because that is what the sync endpoint
/// calls tasks; anything else in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, alias = "items")]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Snapshot {
    pub fn new(tasks: Vec<Task>, projects: Vec<Project>) -> Self {
        Self { tasks, projects }
    }

    /// Decode a snapshot, failing fast when there is nothing to summarize.
    ///
    /// A `null` payload means the source produced no snapshot at all; that is
    /// an input error, not an empty task list.
    pub fn from_json(value: serde_json::Value) -> Result<Self, DigestError> {
        if value.is_null() {
            return Err(DigestError::InvalidInput("snapshot is absent".to_string()));
        }
        serde_json::from_value(value)
            .map_err(|e| DigestError::InvalidInput(format!("snapshot decode: {e}")))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DigestError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| DigestError::InvalidInput(format!("snapshot is not JSON: {e}")))?;
        Self::from_json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn null_snapshot_is_invalid_input() {
        let err = Snapshot::from_json(serde_json::Value::Null).unwrap_err();
        assert!(matches!(err, DigestError::InvalidInput(_)));
    }

    #[test]
    fn wrong_shape_is_invalid_input() {
        let err = Snapshot::from_json(json!({ "items": "nope" })).unwrap_err();
        assert!(err.to_string().contains("snapshot decode"));
    }

    #[test]
    fn items_alias_and_missing_projects() {
        let snapshot = Snapshot::from_json(json!({
            "sync_token": "abc",
            "items": [
                { "id": "1", "content": "A", "due": null, "priority": 1, "project_id": "p" }
            ]
        }))
        .expect("decode");
        assert_eq!(snapshot.tasks.len(), 1);
        assert!(snapshot.projects.is_empty());
    }

    #[test]
    fn from_slice_rejects_non_json() {
        let err = Snapshot::from_slice(b"<html>").unwrap_err();
        assert!(matches!(err, DigestError::InvalidInput(_)));
    }

    #[rstest]
    #[case::missing_project_id(json!({ "id": "bad", "content": "X", "due": { "date": "2024-03-10" } }))]
    #[case::null_project_id(json!({ "id": "bad", "content": "X", "due": { "date": "2024-03-10" }, "project_id": null }))]
    #[case::numeric_due_date(json!({ "id": "bad", "content": "X", "due": { "date": 20240310 }, "project_id": "p" }))]
    #[case::due_without_date(json!({ "id": "bad", "content": "X", "due": { "is_recurring": false }, "project_id": "p" }))]
    #[case::null_content(json!({ "id": "bad", "content": null, "due": null, "project_id": "p" }))]
    fn one_broken_task_keeps_the_rest(#[case] broken: serde_json::Value) {
        let snapshot = Snapshot::from_json(json!({
            "items": [
                { "id": "good", "content": "A", "due": { "date": "2024-03-10" }, "project_id": "p" },
                broken
            ],
            "projects": [{ "id": "p", "name": "Work" }]
        }))
        .expect("decode");

        assert_eq!(snapshot.tasks.len(), 2);
        assert_eq!(snapshot.tasks[0].content, "A");
        assert_eq!(snapshot.tasks[1].id.as_str(), "bad");
    }
}
