//! Project name resolution.

use std::collections::HashMap;

use crate::domain::{Project, ProjectId};

/// Name used when a task's project is not in the snapshot.
pub const NO_PROJECT: &str = "No Project";

/// Look up a project name by id with a linear scan (first match wins).
pub fn resolve<'a>(project_id: &ProjectId, projects: &'a [Project]) -> &'a str {
    projects
        .iter()
        .find(|p| &p.id == project_id)
        .map(|p| p.name.as_str())
        .unwrap_or(NO_PROJECT)
}

/// Keyed index over a project list, built once per run.
///
/// Resolves exactly like [`resolve`]: when ids repeat, the first project in
/// list order wins.
#[derive(Debug, Default)]
pub struct ProjectIndex<'a> {
    names: HashMap<&'a str, &'a str>,
}

impl<'a> ProjectIndex<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        let mut names = HashMap::with_capacity(projects.len());
        for project in projects {
            names
                .entry(project.id.as_str())
                .or_insert(project.name.as_str());
        }
        Self { names }
    }

    pub fn resolve(&self, project_id: &ProjectId) -> &'a str {
        self.names
            .get(project_id.as_str())
            .copied()
            .unwrap_or(NO_PROJECT)
    }
}
