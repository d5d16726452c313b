// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output types: the flat, defaulted issue record.

use serde::Serialize;
use serde_json::Number;

/// A referenced issue (parent, blocker, blocked issue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct IssueRef {
    pub key: String,
    pub summary: String,
    pub status: String,
}

/// Time from creation to last update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WorkDuration {
    /// Whole days; null when either date could not be resolved.
    pub days: Option<i64>,
    pub formatted: String,
}

/// Time since the issue entered its current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StatusDuration {
    pub days: i64,
    pub formatted: String,
}

/// Logged time or estimate, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LoggedTime {
    pub seconds: Option<i64>,
    pub formatted: String,
}

/// One issue, flattened. Every field is always populated with either the
/// source value or its documented default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct NormalizedIssue {
    pub key: String,
    pub url: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub status: String,
    pub priority: String,
    pub assignee: String,
    pub reporter: String,
    pub description: String,
    pub labels: Vec<String>,
    pub components: Vec<String>,
    /// `YYYY-MM-DD` or `"Unknown"`.
    pub created: String,
    /// `YYYY-MM-DD` or `"Unknown"`.
    pub updated: String,
    /// `YYYY-MM-DD` or `"Not resolved"`.
    pub resolved: String,
    pub duration: WorkDuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_current_status: Option<StatusDuration>,
    pub time_logged: LoggedTime,
    pub estimate: LoggedTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<IssueRef>,
    pub is_blocked: bool,
    pub blocked_by: Vec<IssueRef>,
    pub blocks: Vec<IssueRef>,
    pub relates_to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_link: Option<String>,
    #[cfg_attr(feature = "schemars", schemars(with = "Option<f64>"))]
    pub story_points: Option<Number>,
    pub sprint: Option<String>,
    pub due_date: String,
}

/// Message reported when top-level input is not valid JSON.
pub const INVALID_JSON: &str = "Invalid JSON format";

/// Error reported as data rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn invalid_json() -> Self {
        ErrorRecord {
            error: INVALID_JSON.to_string(),
        }
    }
}

/// Result of a normalization call, serialized without a wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Normalized {
    One(Box<NormalizedIssue>),
    Many(Vec<NormalizedIssue>),
    Error(ErrorRecord),
}

impl Normalized {
    /// The normalized issues, in input order. Empty for an error.
    pub fn issues(&self) -> &[NormalizedIssue] {
        match self {
            Normalized::One(issue) => std::slice::from_ref(issue.as_ref()),
            Normalized::Many(issues) => issues,
            Normalized::Error(_) => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Normalized::Error(_))
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
