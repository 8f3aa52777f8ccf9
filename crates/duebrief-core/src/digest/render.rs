//! Summary rendering: bucketed summary → email document.
//!
//! Produces an HTML body and a plain-text alternative carrying the same
//! lines, each followed by the task's due date. Task content, project names and the date label are escaped on
//! the HTML side; headings and placeholders are fixed text and go out
//! verbatim. The text side is sent as `text/plain` and is not escaped.

use serde::Serialize;

use super::classify::LookaheadWindow;
use crate::domain::{BucketedSummary, TaskInfo};

pub const TITLE: &str = "Your Todoist Tasks Summary";
pub const TODAY_HEADING: &str = "Today's Tasks";
pub const NO_TASKS_TODAY: &str = "No tasks due today!";
pub const NO_UPCOMING_TASKS: &str = "No upcoming tasks!";

const STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
.container { max-width: 600px; margin: 0 auto; padding: 20px; }
h1 { color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 10px; }
h2 { color: #2980b9; margin-top: 20px; }
.date { color: #7f8c8d; }
.task { margin: 10px 0; padding: 10px; border-left: 4px solid #3498db; background: #f9f9f9; }
.priority-4 { border-left-color: #e74c3c; }
.priority-3 { border-left-color: #f39c12; }
.priority-2 { border-left-color: #3498db; }
.priority-1 { border-left-color: #95a5a6; }
.due-date { color: #7f8c8d; font-size: 0.9em; }";

const DUE_FORMAT: &str = "%Y-%m-%d";

/// Rendered email content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub html: String,
    pub text: String,
}

/// Heading of the upcoming section for a given window.
pub fn upcoming_heading(window: LookaheadWindow) -> String {
    format!("Upcoming Tasks (Next {window} Days)")
}

/// One entry line: `{content} - Project: {project} - Priority: {priority}`.
pub fn task_line(task: &TaskInfo) -> String {
    format!(
        "{} - Project: {} - Priority: {}",
        task.content, task.project, task.priority
    )
}

/// Render the summary. `window` must be the one the summary was built with.
pub fn render(summary: &BucketedSummary, today_label: &str, window: LookaheadWindow) -> Document {
    let upcoming = upcoming_heading(window);
    let sections = [
        (TODAY_HEADING, summary.today.as_slice(), NO_TASKS_TODAY),
        (upcoming.as_str(), summary.upcoming.as_slice(), NO_UPCOMING_TASKS),
    ];

    Document {
        html: render_html(&sections, today_label),
        text: render_text(&sections, today_label),
    }
}

type Section<'a> = (&'a str, &'a [TaskInfo], &'a str);

fn render_html(sections: &[Section<'_>], today_label: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{TITLE}</title>\n"));
    html.push_str(&format!("<style>\n{STYLE}\n</style>\n</head>\n<body>\n"));
    html.push_str("<div class=\"container\">\n");
    html.push_str(&format!("<h1>{TITLE}</h1>\n"));
    html.push_str(&format!("<p class=\"date\">{}</p>\n", escape_html(today_label)));

    for (heading, tasks, placeholder) in sections {
        html.push_str(&format!("<h2>{heading}</h2>\n"));
        if tasks.is_empty() {
            html.push_str(&format!("<p>{placeholder}</p>\n"));
            continue;
        }
        for task in *tasks {
            html.push_str(&format!(
                "<p class=\"task priority-{priority}\">{} - Project: {} - Priority: {priority} \
                 <span class=\"due-date\">Due: {}</span></p>\n",
                escape_html(&task.content),
                escape_html(&task.project),
                task.due_date.format(DUE_FORMAT),
                priority = task.priority,
            ));
        }
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_text(sections: &[Section<'_>], today_label: &str) -> String {
    let mut text = format!("{TITLE} ({today_label})\n");

    for (heading, tasks, placeholder) in sections {
        text.push_str(&format!("\n{heading}\n"));
        if tasks.is_empty() {
            text.push_str(&format!("  {placeholder}\n"));
            continue;
        }
        for task in *tasks {
            text.push_str(&format!(
                "  - {} (Due: {})\n",
                task_line(task),
                task.due_date.format(DUE_FORMAT)
            ));
        }
    }
    text
}

/// Escape the characters that are structural in HTML text and attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::NaiveDate;

    fn info(content: &str, project: &str, priority: u8) -> TaskInfo {
        TaskInfo {
            content: content.to_string(),
            project: project.to_string(),
            priority: Priority::new(priority),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        }
    }

    fn section<'a>(doc: &'a str, heading: &str, next: Option<&str>) -> &'a str {
        let start = doc.find(heading).expect("heading present");
        let rest = &doc[start..];
        match next.and_then(|n| rest.find(n)) {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    #[test]
    fn empty_summary_renders_both_placeholders() {
        let doc = render(&BucketedSummary::default(), "2024-03-10", LookaheadWindow::default());

        for body in [&doc.html, &doc.text] {
            assert!(body.contains(NO_TASKS_TODAY));
            assert!(body.contains(NO_UPCOMING_TASKS));
            assert!(!body.contains("Project:"));
        }
        // Headings are static text and go out verbatim.
        assert!(doc.html.contains("<h2>Today's Tasks</h2>"));
    }

    #[test]
    fn lines_are_placed_under_their_headings() {
        let summary = BucketedSummary {
            today: vec![info("A", "Work", 2)],
            upcoming: vec![info("B", "Home", 1)],
            rejected: vec![],
        };
        let doc = render(&summary, "2024-03-10", LookaheadWindow::default());
        let upcoming = upcoming_heading(LookaheadWindow::default());
        assert_eq!(upcoming, "Upcoming Tasks (Next 4 Days)");

        for body in [&doc.html, &doc.text] {
            let today_part = section(body, TODAY_HEADING, Some(upcoming.as_str()));
            let upcoming_part = section(body, &upcoming, None);

            assert!(today_part.contains("A - Project: Work - Priority: 2"));
            assert!(!today_part.contains("B - Project"));
            assert!(upcoming_part.contains("B - Project: Home - Priority: 1"));
            assert!(!upcoming_part.contains(NO_UPCOMING_TASKS));
        }
        assert!(doc.html.contains("class=\"task priority-2\""));
    }

    #[test]
    fn window_is_threaded_into_heading() {
        let doc = render(&BucketedSummary::default(), "x", LookaheadWindow::days(7));
        assert!(doc.html.contains("Upcoming Tasks (Next 7 Days)"));
        assert!(doc.text.contains("Upcoming Tasks (Next 7 Days)"));
    }

    #[test]
    fn html_content_is_escaped() {
        let summary = BucketedSummary {
            today: vec![info("<script>alert('x')</script> & co", "R&D \"lab\"", 4)],
            upcoming: vec![],
            rejected: vec![],
        };
        let doc = render(&summary, "<b>today</b>", LookaheadWindow::default());

        assert!(!doc.html.contains("<script>"));
        assert!(!doc.html.contains("<b>today</b>"));
        assert!(doc.html.contains(
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co - Project: R&amp;D &quot;lab&quot; - Priority: 4"
        ));
        assert!(doc.html.contains("&lt;b&gt;today&lt;/b&gt;"));
        // The text part keeps the raw content.
        assert!(doc.text.contains("<script>alert('x')</script> & co - Project: R&D \"lab\" - Priority: 4"));
    }

    #[test]
    fn bucket_order_is_kept() {
        let summary = BucketedSummary {
            today: vec![info("first", "P", 1), info("second", "P", 4)],
            upcoming: vec![],
            rejected: vec![],
        };
        let doc = render(&summary, "d", LookaheadWindow::default());
        let first = doc.text.find("first").unwrap();
        let second = doc.text.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("Buy milk - 2L"), "Buy milk - 2L");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn each_entry_shows_its_due_date() {
        let summary = BucketedSummary {
            today: vec![],
            upcoming: vec![info("B", "Home", 3)],
            rejected: vec![],
        };
        let doc = render(&summary, "2024-03-09", LookaheadWindow::default());

        assert!(doc.html.contains(
            "<p class=\"task priority-3\">B - Project: Home - Priority: 3 <span class=\"due-date\">Due: 2024-03-10</span></p>"
        ));
        assert!(doc.text.contains("  - B - Project: Home - Priority: 3 (Due: 2024-03-10)"));
    }
}
