// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue normalization: one raw issue in, one flat record out.
//!
//! [`normalize`] is the entry point. It accepts JSON text or an already
//! decoded value, handles single issues and lists, and reports undecodable
//! text as an [`ErrorRecord`] instead of failing.

use serde_json::Value;

use crate::config::NormalizeConfig;
use crate::extract::custom::{epic_link, sprint, story_points};
use crate::extract::date::resolve_date;
use crate::extract::description::description_text;
use crate::extract::links::classify_links;
use crate::extract::span::{time_in_status, work_duration};
use crate::extract::timelog::{estimate, time_logged};
use crate::extract::{
    assignee, components, due_date, labels, name_of, parent, reporter, text_or_empty, RawIssue,
};
use crate::issue::{ErrorRecord, Normalized, NormalizedIssue};

/// Input accepted by [`normalize`].
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// JSON text: one issue object or an array of them.
    Text(&'a str),
    /// An already decoded issue or array of issues.
    Value(&'a Value),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        Input::Value(value)
    }
}

/// Normalizes JSON text or a decoded value.
///
/// Arrays yield [`Normalized::Many`] in input order, anything else
/// [`Normalized::One`]. Text that is not valid JSON yields
/// [`Normalized::Error`] with `"Invalid JSON format"`.
pub fn normalize(input: Input<'_>, config: &NormalizeConfig) -> Normalized {
    match input {
        Input::Text(text) => normalize_str(text, config),
        Input::Value(value) => normalize_value(value, config),
    }
}

/// Decodes `text` and normalizes the result.
pub fn normalize_str(text: &str, config: &NormalizeConfig) -> Normalized {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => dispatch(&value, config),
        Err(e) => {
            tracing::debug!("input is not valid JSON: {}", e);
            Normalized::Error(ErrorRecord::invalid_json())
        }
    }
}

/// Normalizes a decoded value. A JSON string value is treated as encoded
/// JSON text and decoded first.
pub fn normalize_value(value: &Value, config: &NormalizeConfig) -> Normalized {
    match value {
        Value::String(text) => normalize_str(text, config),
        other => dispatch(other, config),
    }
}

fn dispatch(value: &Value, config: &NormalizeConfig) -> Normalized {
    match value {
        Value::Array(issues) => Normalized::Many(normalize_batch(issues, config)),
        single => Normalized::One(Box::new(normalize_issue(single, config))),
    }
}

/// Normalizes each issue of a list, preserving order.
pub fn normalize_batch(issues: &[Value], config: &NormalizeConfig) -> Vec<NormalizedIssue> {
    issues
        .iter()
        .map(|issue| normalize_issue(issue, config))
        .collect()
}

/// Normalizes one raw issue. Never fails: every missing or malformed field
/// falls back to its documented default.
pub fn normalize_issue(value: &Value, config: &NormalizeConfig) -> NormalizedIssue {
    let raw = RawIssue::new(value);
    let key = raw.key();
    tracing::trace!("normalizing issue {}", key);

    let created = resolve_date(raw.field("created"));
    let updated = resolve_date(raw.field("updated"));
    let resolved = resolve_date(raw.field("resolutiondate"));
    let status_changed = resolve_date(raw.field("statuscategorychangedate"));

    let links = classify_links(raw.field("issuelinks"));
    let is_blocked = links.is_blocked();

    let custom = &config.fields;

    NormalizedIssue {
        url: config.browse_url(&key),
        key,
        summary: text_or_empty(raw.field("summary")),
        issue_type: name_of(raw.field("issuetype")),
        status: name_of(raw.field("status")),
        priority: name_of(raw.field("priority")),
        assignee: assignee(raw.field("assignee")),
        reporter: reporter(raw.field("reporter")),
        description: description_text(raw.field("description")),
        labels: labels(raw.field("labels")),
        components: components(raw.field("components")),
        created: created.format_or("Unknown"),
        updated: updated.format_or("Unknown"),
        resolved: resolved.format_or("Not resolved"),
        duration: work_duration(created, updated),
        time_in_current_status: time_in_status(status_changed, updated),
        time_logged: time_logged(raw.field("timespent")),
        estimate: estimate(raw.field("timeoriginalestimate")),
        parent: parent(raw.field("parent")),
        is_blocked,
        blocked_by: links.blocked_by,
        blocks: links.blocks,
        relates_to: links.relates_to,
        epic_link: epic_link(raw.field(&custom.epic_link)),
        story_points: story_points(raw.field(&custom.story_points)),
        sprint: sprint(raw.field(&custom.sprint)),
        due_date: due_date(raw.field("duedate")),
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
