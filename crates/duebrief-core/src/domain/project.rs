use serde::{Deserialize, Serialize};

use super::ProjectId;
use super::lenient;

/// Reference data: a project a task can belong to.
///
/// Decodes leniently like [`super::Task`]; an unreadable id becomes the
/// empty id, which no task can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::id_or_empty")]
    pub id: ProjectId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
