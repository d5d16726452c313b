// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field extraction from raw tracker issues.
//!
//! Every extractor here is a total function: it takes a raw field value that
//! may be absent, null or oddly shaped, and always returns the canonical
//! output value. Absence is never an error.

pub mod custom;
pub mod date;
pub mod description;
pub mod links;
pub mod span;
pub mod timelog;

use serde_json::{Map, Value};

use crate::issue::IssueRef;

/// Borrowed view over one raw issue as returned by the tracker API.
#[derive(Debug, Clone, Copy)]
pub struct RawIssue<'a> {
    value: &'a Value,
}

impl<'a> RawIssue<'a> {
    pub fn new(value: &'a Value) -> Self {
        RawIssue { value }
    }

    /// The issue key, verbatim. Empty if absent.
    pub fn key(&self) -> String {
        text_or_empty(self.value.get("key"))
    }

    /// The `fields` mapping, if the issue has one.
    pub fn fields(&self) -> Option<&'a Map<String, Value>> {
        self.value.get("fields").and_then(Value::as_object)
    }

    /// A single entry of `fields`. Null entries read as absent.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.fields()
            .and_then(|fields| fields.get(name))
            .filter(|v| !v.is_null())
    }
}

/// Truthiness as the tracker's own tooling treats JSON values: null, false,
/// zero and empty containers are all "missing".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Strings pass through; other non-null values render as compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text of an optional value, or an empty string when absent or null.
pub fn text_or_empty(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => scalar_text(v),
    }
}

/// Reads `attr` off an object-valued field such as `status` or `priority`.
///
/// Missing, null or empty objects yield an empty string.
pub fn attr_of(value: Option<&Value>, attr: &str) -> String {
    match value {
        Some(Value::Object(map)) if !map.is_empty() => text_or_empty(map.get(attr)),
        _ => String::new(),
    }
}

/// `name` of an object-valued field.
pub fn name_of(value: Option<&Value>) -> String {
    attr_of(value, "name")
}

/// Display name of the assignee, or `"Unassigned"`.
pub fn assignee(value: Option<&Value>) -> String {
    match value {
        Some(v) if is_truthy(v) && v.is_object() => attr_of(Some(v), "displayName"),
        _ => "Unassigned".to_string(),
    }
}

/// Display name of the reporter, or an empty string.
pub fn reporter(value: Option<&Value>) -> String {
    attr_of(value, "displayName")
}

/// Labels in order. Null entries are dropped.
pub fn labels(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|v| !v.is_null())
        .map(scalar_text)
        .collect()
}

/// Component names in order. Null and empty components are dropped.
pub fn components(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|v| is_truthy(v))
        .map(|component| match component {
            Value::Object(map) => text_or_empty(map.get("name")),
            other => scalar_text(other),
        })
        .collect()
}

/// `{key, summary, status}` of a referenced issue (parent or linked issue).
pub fn issue_ref(value: &Value) -> IssueRef {
    let fields = value.get("fields");
    IssueRef {
        key: text_or_empty(value.get("key")),
        summary: text_or_empty(fields.and_then(|f| f.get("summary"))),
        status: name_of(fields.and_then(|f| f.get("status"))),
    }
}

/// The parent issue, present only when the source parent is non-empty.
pub fn parent(value: Option<&Value>) -> Option<IssueRef> {
    value
        .filter(|v| is_truthy(v) && v.is_object())
        .map(issue_ref)
}

/// Due date verbatim, or `"No due date"`.
pub fn due_date(value: Option<&Value>) -> String {
    match value {
        Some(v) if is_truthy(v) => scalar_text(v),
        _ => "No due date".to_string(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
