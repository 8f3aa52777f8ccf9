//! Domain model (IDs, tasks, projects, snapshots, summaries, errors).

pub mod due;
pub mod errors;
pub mod ids;
mod lenient;
pub mod project;
pub mod snapshot;
pub mod summary;
pub mod task;

pub use self::errors::{DigestError, ErrorKind, MalformedDueDate};
pub use self::ids::{ProjectId, RunId, TaskId};
pub use self::project::Project;
pub use self::snapshot::Snapshot;
pub use self::summary::{BucketedSummary, TaskInfo};
pub use self::task::{DueInfo, Priority, Task};
