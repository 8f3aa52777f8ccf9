//! Task summarization: snapshot → bucketed summary.

use chrono::{FixedOffset, NaiveDate};

use super::classify::{Bucket, LookaheadWindow, classify};
use super::resolve::{NO_PROJECT, ProjectIndex};
use crate::domain::due::parse_due_date;
use crate::domain::{BucketedSummary, MalformedDueDate, Snapshot, TaskInfo};

/// Build the bucketed summary for one run.
///
/// Pure: `today` and `window` are parameters, never read from a clock.
/// Tasks without a due date are skipped. A task whose due date cannot be
/// parsed is recorded in `rejected` and does not affect the others. A task
/// without a project id is shown under [`NO_PROJECT`].
pub fn summarize(
    snapshot: &Snapshot,
    today: NaiveDate,
    window: LookaheadWindow,
    tz: FixedOffset,
) -> BucketedSummary {
    let projects = ProjectIndex::new(&snapshot.projects);
    let mut summary = BucketedSummary::default();

    for task in &snapshot.tasks {
        let Some(due) = &task.due else {
            continue;
        };

        let Some(due_date) = parse_due_date(&due.date, tz) else {
            summary.rejected.push(MalformedDueDate {
                task_id: task.id.clone(),
                raw: due.date.clone(),
            });
            continue;
        };

        let bucket = classify(due_date, today, window);
        if bucket == Bucket::OutOfWindow {
            continue;
        }

        let info = TaskInfo {
            content: task.content.clone(),
            project: task
                .project_id
                .as_ref()
                .map_or(NO_PROJECT, |id| projects.resolve(id))
                .to_string(),
            priority: task.priority,
            due_date,
        };

        match bucket {
            Bucket::Today => summary.today.push(info),
            Bucket::Upcoming => summary.upcoming.push(info),
            Bucket::OutOfWindow => {}
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, Project, Task};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn example_snapshot() -> Snapshot {
        Snapshot::new(
            vec![
                Task::new("t1", "A", "1").with_due("2024-03-10").with_priority(2),
                Task::new("t2", "B", "2").with_due("2024-03-13").with_priority(1),
                Task::new("t3", "B2", "2").with_due("2024-03-15").with_priority(1),
                Task::new("t4", "C", "9").with_due("2024-03-05").with_priority(3),
            ],
            vec![Project::new("1", "Work"), Project::new("2", "Home")],
        )
    }

    #[test]
    fn worked_example_buckets() {
        let summary = summarize(&example_snapshot(), today(), LookaheadWindow::default(), utc());

        let today_rows: Vec<_> = summary
            .today
            .iter()
            .map(|t| (t.content.as_str(), t.project.as_str(), t.priority.value()))
            .collect();
        let upcoming_rows: Vec<_> = summary
            .upcoming
            .iter()
            .map(|t| (t.content.as_str(), t.project.as_str(), t.priority.value()))
            .collect();

        assert_eq!(today_rows, vec![("A", "Work", 2)]);
        assert_eq!(upcoming_rows, vec![("B", "Home", 1)]);
        assert!(summary.rejected.is_empty());
    }

    #[test]
    fn tasks_without_due_date_are_skipped() {
        let snapshot = Snapshot::new(vec![Task::new("t1", "no date", "1")], vec![]);
        let summary = summarize(&snapshot, today(), LookaheadWindow::default(), utc());
        assert!(summary.is_empty());
        assert!(summary.rejected.is_empty());
    }

    #[test]
    fn malformed_due_date_is_isolated() {
        let snapshot = Snapshot::new(
            vec![
                Task::new("bad", "broken", "1").with_due("someday"),
                Task::new("ok", "fine", "1").with_due("2024-03-10"),
            ],
            vec![],
        );
        let summary = summarize(&snapshot, today(), LookaheadWindow::default(), utc());

        assert_eq!(summary.today.len(), 1);
        assert_eq!(summary.today[0].content, "fine");
        assert_eq!(summary.today[0].project, NO_PROJECT);
        assert_eq!(summary.rejected.len(), 1);
        assert_eq!(summary.rejected[0].task_id.as_str(), "bad");
        assert_eq!(summary.rejected[0].raw, "someday");
    }

    #[test]
    fn order_follows_snapshot_not_priority() {
        let snapshot = Snapshot::new(
            vec![
                Task::new("1", "low", "p").with_due("2024-03-12").with_priority(1),
                Task::new("2", "high", "p").with_due("2024-03-11").with_priority(4),
                Task::new("3", "mid", "p").with_due("2024-03-14").with_priority(2),
            ],
            vec![],
        );
        let summary = summarize(&snapshot, today(), LookaheadWindow::default(), utc());
        let order: Vec<_> = summary.upcoming.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(order, vec!["low", "high", "mid"]);
    }

    #[test]
    fn every_task_lands_in_at_most_one_bucket() {
        let tasks = (0..20)
            .map(|i| {
                let due = today() + chrono::Duration::days(i - 5);
                Task::new(format!("t{i}").as_str(), format!("task {i}"), "p")
                    .with_due(due.format("%Y-%m-%d").to_string())
            })
            .collect();
        let summary = summarize(
            &Snapshot::new(tasks, vec![]),
            today(),
            LookaheadWindow::default(),
            utc(),
        );

        assert_eq!(summary.today.len(), 1);
        assert_eq!(summary.upcoming.len(), 4);
        for t in &summary.today {
            assert!(!summary.upcoming.contains(t));
        }
    }

    #[test]
    fn timestamps_are_read_in_the_given_offset() {
        let snapshot = Snapshot::new(
            vec![Task::new("1", "late call", "p").with_due("2024-03-09T20:00:00Z")],
            vec![],
        );
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();

        let in_utc = summarize(&snapshot, today(), LookaheadWindow::default(), utc());
        let shifted = summarize(&snapshot, today(), LookaheadWindow::default(), plus_five);

        // 20:00Z on the 9th is overdue in UTC but is the 10th at +05:00.
        assert!(in_utc.is_empty());
        assert_eq!(shifted.today.len(), 1);
        assert_eq!(shifted.today[0].due_date, today());
    }

    #[test]
    fn priority_is_carried_through_unchanged() {
        let snapshot = Snapshot::new(
            vec![Task::new("1", "x", "p").with_due("2024-03-10")],
            vec![],
        );
        let summary = summarize(&snapshot, today(), LookaheadWindow::default(), utc());
        assert_eq!(summary.today[0].priority, Priority::NORMAL);
    }

    #[test]
    fn broken_fields_are_isolated_per_task() {
        let snapshot = Snapshot::from_json(serde_json::json!({
            "items": [
                { "id": "n", "content": "orphan", "due": { "date": "2024-03-10" } },
                { "id": "d", "content": "numeric date", "due": { "date": 20240310 }, "project_id": "1" },
                { "id": "e", "content": "no date", "due": { "string": "soon" }, "project_id": "1" },
                { "id": "k", "content": "kept", "due": { "date": "2024-03-11" }, "project_id": "1" }
            ],
            "projects": [{ "id": "1", "name": "Work" }]
        }))
        .expect("decode");

        let summary = summarize(&snapshot, today(), LookaheadWindow::default(), utc());

        assert_eq!(summary.today.len(), 1);
        assert_eq!(summary.today[0].project, NO_PROJECT);
        assert_eq!(summary.upcoming.len(), 1);
        assert_eq!(summary.upcoming[0].project, "Work");
        let rejected: Vec<_> = summary
            .rejected
            .iter()
            .map(|r| (r.task_id.as_str(), r.raw.as_str()))
            .collect();
        assert_eq!(rejected, vec![("d", "20240310"), ("e", "")]);
    }
}
