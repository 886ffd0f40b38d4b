//! Markdown rendering of a board snapshot.

use super::snapshot::{DashboardSnapshot, SnapshotRenderer};
use anyhow::Result;
use chrono::Datelike;
use std::fmt::Write as _;

/// Renders the agenda as a Markdown document.
///
/// Every topic is listed with its full detailed description, regardless of
/// which cards were expanded on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownRenderer;

/// Escapes characters that would break a table cell.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl SnapshotRenderer for MarkdownRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String> {
        let data = &snapshot.data;
        let summary = snapshot.summary;
        let mut output = String::new();

        let _ = writeln!(output, "# {}", data.organization_name);
        output.push('\n');
        let _ = writeln!(
            output,
            "**{}** · Board meeting agenda for {}",
            data.organization_category,
            snapshot.formatted_date()
        );
        output.push('\n');

        output.push_str("## Summary\n\n");
        output.push_str("| Topics | In Progress | Completed | Total Minutes |\n");
        output.push_str("|---|---|---|---|\n");
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} |",
            summary.total_topics,
            summary.in_progress_count,
            summary.completed_count,
            summary.total_minutes
        );
        output.push('\n');

        output.push_str("## Agenda\n\n");
        if data.topics.is_empty() {
            output.push_str("_No topics scheduled._\n\n");
        }
        for topic in &data.topics {
            let _ = writeln!(output, "### {}. {}", topic.order + 1, topic.title);
            output.push('\n');
            let _ = writeln!(output, "| Status | Priority | Estimated |");
            output.push_str("|---|---|---|\n");
            let _ = writeln!(
                output,
                "| {} | {} | {} min |",
                table_cell(topic.status.label()),
                topic.priority.badge(),
                topic.estimated_minutes
            );
            output.push('\n');
            let _ = writeln!(output, "{}", topic.description);
            output.push('\n');
            if !topic.detailed_description.is_empty() {
                let _ = writeln!(output, "> {}", topic.detailed_description);
                output.push('\n');
            }
        }

        output.push_str("---\n\n");
        let _ = writeln!(
            output,
            "© {} {}",
            snapshot.meeting_date.year(),
            data.organization_name
        );
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
