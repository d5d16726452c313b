// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable rendering of normalized issues.

use jf_core::{IssueRef, Normalized, NormalizedIssue};

/// Maximum line width for wrapped description text (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Wrap text at word boundaries if it's a single line.
///
/// Multi-line content is returned as-is to keep its formatting.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

fn indent(content: &str, prefix: &str) -> String {
    content
        .lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats a referenced issue as `KEY: summary [status]`.
pub fn format_ref(issue: &IssueRef) -> String {
    format!("{}: {} [{}]", issue.key, issue.summary, issue.status)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Formats one normalized issue as a multi-line block.
pub fn format_issue(issue: &NormalizedIssue) -> String {
    let mut out = vec![
        format!("[{}] {}: {}", issue.issue_type, issue.key, issue.summary),
        format!("URL: {}", issue.url),
        format!("Status: {}", issue.status),
        format!("Priority: {}", issue.priority),
        format!("Assignee: {}", issue.assignee),
        format!("Reporter: {}", issue.reporter),
        format!("Labels: {}", join_or_none(&issue.labels)),
        format!("Components: {}", join_or_none(&issue.components)),
        format!("Created: {}", issue.created),
        format!("Updated: {}", issue.updated),
        format!("Resolved: {}", issue.resolved),
        format!("Duration: {}", issue.duration.formatted),
    ];

    if let Some(in_status) = &issue.time_in_current_status {
        out.push(format!("In status: {}", in_status.formatted));
    }
    out.push(format!("Time logged: {}", issue.time_logged.formatted));
    out.push(format!("Estimate: {}", issue.estimate.formatted));
    out.push(format!("Due: {}", issue.due_date));

    if let Some(parent) = &issue.parent {
        out.push(format!("Parent: {}", format_ref(parent)));
    }
    if let Some(epic) = &issue.epic_link {
        out.push(format!("Epic: {}", epic));
    }
    if let Some(points) = &issue.story_points {
        out.push(format!("Story points: {}", points));
    }
    if let Some(sprint) = &issue.sprint {
        out.push(format!("Sprint: {}", sprint));
    }

    if issue.is_blocked {
        out.push("Blocked by:".to_string());
        for blocker in &issue.blocked_by {
            out.push(format!("  {}", format_ref(blocker)));
        }
    }
    if !issue.blocks.is_empty() {
        out.push("Blocks:".to_string());
        for blocked in &issue.blocks {
            out.push(format!("  {}", format_ref(blocked)));
        }
    }
    if !issue.relates_to.is_empty() {
        out.push(format!("Relates to: {}", issue.relates_to.join(", ")));
    }

    if !issue.description.is_empty() {
        out.push("Description:".to_string());
        out.push(indent(&wrap_text(&issue.description, WRAP_WIDTH), "    "));
    }

    out.join("\n")
}

/// Formats a normalization result. Issues are separated by a blank line.
pub fn format_normalized(result: &Normalized) -> String {
    match result {
        Normalized::Error(record) => format!("error: {}", record.error),
        _ => result
            .issues()
            .iter()
            .map(format_issue)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
